//! Timestamp wire formats
//!
//! The MessagePack timestamp extension defines three fixed-size payload
//! encodings, selected by the numeric range of the value:
//!
//! ```text
//! timestamp 32: seconds_u32(4)                      -- 0 <= secs <= u32::MAX, nanos == 0
//! timestamp 64: (nanos << 34 | secs)_u64(8)         -- 0 <= secs < 2^34
//! timestamp 96: nanos_u32(4) | secs_i64(8)          -- everything else
//! ```
//!
//! All fields are big-endian. The 34-bit threshold is exact: 2^34 seconds
//! past the epoch falls in the year 2514, the rollover point of the 64-bit
//! form.

use crate::timestamp::Timestamp;

/// Encoded timestamp payload, one of the three fixed sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampPayload {
    /// 4-byte form: big-endian unsigned seconds
    Ts32([u8; 4]),
    /// 8-byte form: big-endian `(nanos << 34) | secs`
    Ts64([u8; 8]),
    /// 12-byte form: big-endian u32 nanos, then big-endian i64 secs
    Ts96([u8; 12]),
}

impl TimestampPayload {
    /// View the payload as a byte slice
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Ts32(b) => b,
            Self::Ts64(b) => b,
            Self::Ts96(b) => b,
        }
    }

    /// Payload length in bytes: 4, 8, or 12
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Always false; every format carries at least 4 bytes
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Encode a timestamp into the smallest wire format that represents it.
///
/// Range selection follows the reference pseudo-code bit for bit: the
/// seconds value is reinterpreted as *unsigned* 64-bit before the 34-bit
/// test, so every negative seconds value fails it and takes the 96-bit
/// form regardless of magnitude. Other implementations of this extension
/// do the same; the selection is part of the wire contract.
pub fn encode(ts: Timestamp) -> TimestampPayload {
    let secs = ts.secs();
    let nanos = ts.nanos();

    if (secs as u64) >> 34 == 0 {
        if nanos == 0 && secs as u64 <= u64::from(u32::MAX) {
            TimestampPayload::Ts32((secs as u32).to_be_bytes())
        } else {
            // secs fits in 34 bits here, so the two fields cannot overlap
            let packed = (u64::from(nanos) << 34) | (secs as u64);
            TimestampPayload::Ts64(packed.to_be_bytes())
        }
    } else {
        let mut buf = [0u8; 12];
        buf[0..4].copy_from_slice(&nanos.to_be_bytes());
        buf[4..12].copy_from_slice(&secs.to_be_bytes());
        TimestampPayload::Ts96(buf)
    }
}

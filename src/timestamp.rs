//! Epoch timestamp value type
//!
//! A [`Timestamp`] is a signed count of whole seconds since the Unix epoch
//! plus a nanosecond-of-second fraction. Seconds may be negative (instants
//! before the epoch); the nanosecond field is always non-negative and
//! strictly less than one second.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};

/// Nanoseconds per second
pub const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Extension type tag for timestamps: -1, wire byte 0xFF
pub const TIMESTAMP_EXT_TYPE: i8 = -1;

/// An absolute instant: epoch seconds plus nanosecond-of-second
///
/// Invariant: `nanos < 1_000_000_000`. The normalizing constructors
/// ([`from_millis`](Self::from_millis), the `SystemTime` and `DateTime`
/// conversions) always uphold it; [`new`](Self::new) requires the caller to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    secs: i64,
    nanos: u32,
}

impl Timestamp {
    /// Create a timestamp from whole seconds and a nanosecond fraction.
    ///
    /// Precondition: `nanos < 1_000_000_000`. Callers must fold any carry
    /// into `secs` before constructing. Violating the precondition is a
    /// programming error; the encoded bytes for such a value are
    /// unspecified.
    pub fn new(secs: i64, nanos: u32) -> Self {
        debug_assert!(nanos < NANOS_PER_SEC, "nanos out of range: {}", nanos);
        Self { secs, nanos }
    }

    /// Current wall-clock time
    pub fn now() -> Self {
        SystemTime::now().into()
    }

    /// Convert an epoch-millisecond count.
    ///
    /// Floor division keeps the fraction non-negative: `-1` ms becomes
    /// `(-1 s, 999_000_000 ns)`, not `(0 s, -1 ms)`.
    pub fn from_millis(millis: i64) -> Self {
        let secs = millis.div_euclid(1000);
        let nanos = millis.rem_euclid(1000) as u32 * 1_000_000;
        Self { secs, nanos }
    }

    /// Whole seconds since the epoch (negative before the epoch)
    pub fn secs(&self) -> i64 {
        self.secs
    }

    /// Nanosecond-of-second, in `[0, 999_999_999]`
    pub fn nanos(&self) -> u32 {
        self.nanos
    }
}

impl From<SystemTime> for Timestamp {
    fn from(t: SystemTime) -> Self {
        match t.duration_since(UNIX_EPOCH) {
            Ok(d) => Self::new(d.as_secs() as i64, d.subsec_nanos()),
            // Pre-epoch: negate and borrow one second so nanos stays
            // non-negative
            Err(e) => {
                let d = e.duration();
                let mut secs = -(d.as_secs() as i64);
                let mut nanos = 0;
                if d.subsec_nanos() > 0 {
                    secs -= 1;
                    nanos = NANOS_PER_SEC - d.subsec_nanos();
                }
                Self::new(secs, nanos)
            }
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        let mut secs = dt.timestamp();
        let mut nanos = dt.timestamp_subsec_nanos();
        // chrono represents a leap second as subsec nanos >= 1e9
        if nanos >= NANOS_PER_SEC {
            secs += 1;
            nanos -= NANOS_PER_SEC;
        }
        Self::new(secs, nanos)
    }
}

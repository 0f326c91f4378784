//! Extension-type writer seam and MessagePack framing
//!
//! The encoder core produces a bare payload; getting it onto the wire takes
//! an [`ExtensionWriter`], which frames the payload with an extension-type
//! header. [`MsgpackExtWriter`] is the standard implementation over any
//! `io::Write` sink.

use std::io::Write;

use chrono::{DateTime, Utc};

use crate::error::{EncodeError, Result};
use crate::format;
use crate::timestamp::{Timestamp, TIMESTAMP_EXT_TYPE};

/// Sink for extension-typed payloads
///
/// An encoded timestamp is emitted in two steps: the header (type tag plus
/// payload length), then the raw payload bytes.
pub trait ExtensionWriter {
    /// Write an extension-type header for a `len`-byte payload
    fn write_ext_header(&mut self, ext_type: i8, len: usize) -> Result<()>;

    /// Write raw payload bytes
    fn write_payload(&mut self, bytes: &[u8]) -> Result<()>;
}

/// MessagePack extension format markers
const FIXEXT1: u8 = 0xD4;
const FIXEXT2: u8 = 0xD5;
const FIXEXT4: u8 = 0xD6;
const FIXEXT8: u8 = 0xD7;
const FIXEXT16: u8 = 0xD8;
const EXT8: u8 = 0xC7;

/// Extension writer producing standard MessagePack framing
///
/// Header selection matches the canonical serializers: `fixext` markers for
/// the fixed power-of-two sizes, `ext 8` with an explicit length byte
/// otherwise. The 4- and 8-byte timestamp payloads take `fixext 4`/`fixext 8`;
/// the 12-byte payload takes `ext 8`.
pub struct MsgpackExtWriter<W> {
    inner: W,
}

impl<W: Write> MsgpackExtWriter<W> {
    /// Wrap an `io::Write` sink
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwrap, returning the underlying sink
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ExtensionWriter for MsgpackExtWriter<W> {
    fn write_ext_header(&mut self, ext_type: i8, len: usize) -> Result<()> {
        match len {
            1 => self.inner.write_all(&[FIXEXT1])?,
            2 => self.inner.write_all(&[FIXEXT2])?,
            4 => self.inner.write_all(&[FIXEXT4])?,
            8 => self.inner.write_all(&[FIXEXT8])?,
            16 => self.inner.write_all(&[FIXEXT16])?,
            n if n <= u8::MAX as usize => self.inner.write_all(&[EXT8, n as u8])?,
            n => return Err(EncodeError::PayloadTooLarge { len: n }),
        }
        self.inner.write_all(&[ext_type as u8])?;
        Ok(())
    }

    fn write_payload(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        Ok(())
    }
}

/// Encode `ts` and emit it through `writer` tagged as a timestamp extension.
pub fn write_timestamp<W: ExtensionWriter>(writer: &mut W, ts: Timestamp) -> Result<()> {
    let payload = format::encode(ts);
    tracing::trace!("Timestamp payload: {} bytes", payload.len());
    writer.write_ext_header(TIMESTAMP_EXT_TYPE, payload.len())?;
    writer.write_payload(payload.as_bytes())
}

/// Encode an epoch-millisecond count.
///
/// Floor-divides into whole seconds plus a non-negative millisecond
/// remainder scaled to nanoseconds before delegating to [`write_timestamp`].
pub fn write_timestamp_millis<W: ExtensionWriter>(writer: &mut W, millis: i64) -> Result<()> {
    write_timestamp(writer, Timestamp::from_millis(millis))
}

/// Encode a calendar timestamp via its `(seconds, nanoseconds)` accessors.
pub fn write_timestamp_datetime<W: ExtensionWriter>(
    writer: &mut W,
    dt: DateTime<Utc>,
) -> Result<()> {
    write_timestamp(writer, Timestamp::from(dt))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(ts: Timestamp) -> Vec<u8> {
        let mut writer = MsgpackExtWriter::new(Vec::new());
        write_timestamp(&mut writer, ts).unwrap();
        writer.into_inner()
    }

    #[test]
    fn test_four_byte_payload_frames_as_fixext4() {
        let bytes = written(Timestamp::new(1, 0));
        assert_eq!(bytes, [0xD6, 0xFF, 0x00, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn test_eight_byte_payload_frames_as_fixext8() {
        let bytes = written(Timestamp::new(0, 1));
        assert_eq!(
            bytes,
            [0xD7, 0xFF, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_twelve_byte_payload_frames_as_ext8() {
        let bytes = written(Timestamp::new(-1, 0));
        // ext 8 marker, length 12, type -1, 4 zero nanos bytes, 8 bytes of -1
        let mut expected = vec![0xC7, 0x0C, 0xFF, 0x00, 0x00, 0x00, 0x00];
        expected.extend_from_slice(&(-1i64).to_be_bytes());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_type_tag_is_always_0xff() {
        for ts in [
            Timestamp::new(0, 0),
            Timestamp::new(0, 1),
            Timestamp::new(-1, 0),
        ] {
            let bytes = written(ts);
            let tag_pos = if bytes[0] == 0xC7 { 2 } else { 1 };
            assert_eq!(bytes[tag_pos], 0xFF);
        }
    }

    #[test]
    fn test_write_timestamp_millis_floor_division() {
        let mut writer = MsgpackExtWriter::new(Vec::new());
        write_timestamp_millis(&mut writer, -1).unwrap();
        let bytes = writer.into_inner();

        // -1 ms normalizes to (-1 s, 999_000_000 ns): timestamp 96
        let mut expected = vec![0xC7, 0x0C, 0xFF];
        expected.extend_from_slice(&999_000_000u32.to_be_bytes());
        expected.extend_from_slice(&(-1i64).to_be_bytes());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_write_timestamp_millis_whole_seconds() {
        let mut writer = MsgpackExtWriter::new(Vec::new());
        write_timestamp_millis(&mut writer, 1_000).unwrap();
        assert_eq!(
            writer.into_inner(),
            [0xD6, 0xFF, 0x00, 0x00, 0x00, 0x01]
        );
    }

    #[test]
    fn test_write_timestamp_datetime() {
        use chrono::TimeZone;

        let dt = Utc.timestamp_opt(1, 0).unwrap();
        let mut writer = MsgpackExtWriter::new(Vec::new());
        write_timestamp_datetime(&mut writer, dt).unwrap();
        assert_eq!(
            writer.into_inner(),
            [0xD6, 0xFF, 0x00, 0x00, 0x00, 0x01]
        );
    }

    #[test]
    fn test_ext_header_fixed_sizes() {
        let mut writer = MsgpackExtWriter::new(Vec::new());
        writer.write_ext_header(7, 1).unwrap();
        writer.write_ext_header(7, 2).unwrap();
        writer.write_ext_header(7, 16).unwrap();
        assert_eq!(
            writer.into_inner(),
            [0xD4, 0x07, 0xD5, 0x07, 0xD8, 0x07]
        );
    }

    #[test]
    fn test_ext_header_oversized_payload_is_rejected() {
        let mut writer = MsgpackExtWriter::new(Vec::new());
        let result = writer.write_ext_header(7, 300);
        assert!(matches!(
            result,
            Err(EncodeError::PayloadTooLarge { len: 300 })
        ));
    }

    #[test]
    fn test_io_error_propagates() {
        struct FailingSink;
        impl Write for FailingSink {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "sink closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut writer = MsgpackExtWriter::new(FailingSink);
        let result = write_timestamp(&mut writer, Timestamp::new(0, 0));
        assert!(matches!(result, Err(EncodeError::Io(_))));
    }
}

//! MessagePack timestamp extension type encoder
//!
//! Encodes `(seconds, nanoseconds)` instants into the three fixed-size wire
//! representations of the MessagePack timestamp extension (type -1) and
//! emits them through an extension-type writer.
//!
//! # Features
//!
//! - Exact three-tier range selection (timestamp 32/64/96)
//! - Full signed 64-bit second range with nanosecond precision
//! - Conversions from epoch milliseconds, `SystemTime`, and `DateTime<Utc>`
//! - Standard MessagePack extension framing over any `io::Write` sink
//!
//! # Usage
//!
//! ```
//! use msgpack_timestamp::{write_timestamp, MsgpackExtWriter, Timestamp};
//!
//! let mut writer = MsgpackExtWriter::new(Vec::new());
//! write_timestamp(&mut writer, Timestamp::new(1, 0))?;
//! assert_eq!(writer.into_inner(), [0xD6, 0xFF, 0x00, 0x00, 0x00, 0x01]);
//! # Ok::<(), msgpack_timestamp::EncodeError>(())
//! ```

pub mod error;
pub mod format;
pub mod timestamp;
pub mod writer;

pub use error::EncodeError;
pub use format::{encode, TimestampPayload};
pub use timestamp::{Timestamp, TIMESTAMP_EXT_TYPE};
pub use writer::{
    write_timestamp, write_timestamp_datetime, write_timestamp_millis, ExtensionWriter,
    MsgpackExtWriter,
};

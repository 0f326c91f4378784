//! Verify timestamp extension encoding against known vectors

use msgpack_timestamp::{encode, write_timestamp, MsgpackExtWriter, Timestamp};

fn main() {
    println!("=== MessagePack Timestamp Vector Verification ===\n");

    let vectors: &[(i64, u32, &str)] = &[
        (0, 0, "epoch"),
        (1, 0, "one second past epoch"),
        (0xFFFF_FFFF, 0, "2106-02-07T06:28:15Z (u32 max)"),
        (0, 1, "one nanosecond past epoch"),
        (0x3_FFFF_FFFF, 0, "2^34 - 1 seconds"),
        (0x4_0000_0000, 0, "2^34 seconds"),
        (-1, 999_999_999, "one nanosecond before epoch"),
        (i64::MIN, 0, "minimum seconds"),
    ];

    for (secs, nanos, label) in vectors {
        let ts = Timestamp::new(*secs, *nanos);
        let payload = encode(ts);

        let mut writer = MsgpackExtWriter::new(Vec::new());
        write_timestamp(&mut writer, ts).expect("vec sink cannot fail");
        let framed = writer.into_inner();

        println!("{} (secs={}, nanos={}):", label, secs, nanos);
        println!("  Payload ({} bytes): {}", payload.len(), hex::encode(payload.as_bytes()));
        println!("  Framed: {}", hex::encode(&framed));

        // The framed form is the payload behind a fixext/ext8 header plus
        // the 0xFF type byte
        let header_len = if framed[0] == 0xC7 { 3 } else { 2 };
        assert_eq!(&framed[header_len..], payload.as_bytes());
        println!();
    }

    println!("All vectors verified: OK");
}

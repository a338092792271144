//! Tests for string, raw byte-block and timestamp codecs

use bytecursor::cursor::{datetime_to_ticks, MAX_STRING_LEN};
use bytecursor::{ByteCursor, ByteOrder, CursorError};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

// =============================================================================
// String Tests
// =============================================================================

#[test]
fn test_empty_string_is_two_bytes() {
    let mut cursor = ByteCursor::new();
    cursor.write_str("").unwrap();
    assert_eq!(cursor.as_slice(), &[0, 0]);

    cursor.rewind();
    assert_eq!(cursor.read_string().unwrap(), "");
    assert_eq!(cursor.position(), 2);
}

#[test]
fn test_absent_string_encodes_as_empty() {
    let mut cursor = ByteCursor::new();
    cursor.write_opt_str(None).unwrap();
    cursor.write_opt_str(Some("x")).unwrap();
    assert_eq!(cursor.as_slice(), &[0, 0, 1, 0, b'x']);

    cursor.rewind();
    assert_eq!(cursor.read_string().unwrap(), "");
    assert_eq!(cursor.read_string().unwrap(), "x");
}

#[test]
fn test_prefix_counts_bytes_not_chars() {
    let text = "héllo, 世界";
    let mut cursor = ByteCursor::new();
    cursor.write_str(text).unwrap();
    assert_eq!(cursor.len(), 2 + text.len());
    assert_eq!(&cursor.as_slice()[..2], &(text.len() as u16).to_le_bytes());

    cursor.rewind();
    assert_eq!(cursor.read_string().unwrap(), text);
}

#[test]
fn test_string_prefix_follows_byte_order() {
    let mut cursor = ByteCursor::new();
    cursor.set_byte_order(ByteOrder::Big);
    cursor.write_str("abc").unwrap();
    assert_eq!(cursor.as_slice(), &[0, 3, b'a', b'b', b'c']);
}

#[test]
fn test_truncated_string_keeps_position() {
    // Prefix claims 10 bytes but only 3 follow
    let mut cursor = ByteCursor::from_vec(vec![10, 0, b'a', b'b', b'c']);
    let err = cursor.read_string().unwrap_err();
    assert!(matches!(err, CursorError::Boundary { needed: 10, available: 3, .. }));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_oversized_string_rejected() {
    let mut cursor = ByteCursor::new();
    let err = cursor.write_str(&"q".repeat(MAX_STRING_LEN + 10)).unwrap_err();
    assert!(matches!(err, CursorError::StringTooLong { .. }));
    assert_eq!(cursor.len(), 0);
}

// =============================================================================
// Raw Byte Block Tests
// =============================================================================

#[test]
fn test_bytes_have_no_prefix() {
    let mut cursor = ByteCursor::new();
    cursor.write_bytes(&[0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(cursor.as_slice(), &[0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn test_empty_bytes_is_noop() {
    let mut cursor = ByteCursor::new();
    cursor.write_bytes(&[]);
    assert!(cursor.is_empty());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_read_bytes_copies_out() {
    let mut cursor = ByteCursor::from_vec((0u8..10).collect());
    let first = cursor.read_bytes(4).unwrap();
    assert_eq!(first, vec![0, 1, 2, 3]);
    assert_eq!(cursor.position(), 4);

    let mut rest = [0u8; 6];
    cursor.read_into(&mut rest).unwrap();
    assert_eq!(rest, [4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_read_bytes_past_end() {
    let mut cursor = ByteCursor::from_vec(vec![1, 2]);
    assert!(cursor.read_bytes(3).unwrap_err().is_boundary());
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.read_bytes(0).unwrap(), Vec::<u8>::new());
}

// =============================================================================
// Timestamp Tests
// =============================================================================

#[test]
fn test_timestamp_round_trip_utc() {
    let instant = Utc.with_ymd_and_hms(2024, 2, 29, 13, 45, 7).unwrap();
    for order in [ByteOrder::Little, ByteOrder::Big] {
        let mut cursor = ByteCursor::new();
        cursor.set_byte_order(order);
        cursor.write_timestamp(&instant).unwrap();
        assert_eq!(cursor.len(), 8);

        cursor.rewind();
        assert_eq!(cursor.read_timestamp().unwrap(), instant);
    }
}

#[test]
fn test_timestamp_normalized_to_utc() {
    let offset = FixedOffset::east_opt(5 * 3600).unwrap();
    let local = offset.with_ymd_and_hms(2020, 1, 1, 5, 0, 0).unwrap();
    let utc = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

    let mut a = ByteCursor::new();
    a.write_timestamp(&local).unwrap();
    let mut b = ByteCursor::new();
    b.write_timestamp(&utc).unwrap();
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_timestamp_encodes_ticks_as_i64() {
    let instant = DateTime::from_timestamp(0, 0).unwrap();
    let mut cursor = ByteCursor::new();
    cursor.write_timestamp(&instant).unwrap();

    cursor.rewind();
    let ticks = cursor.read_i64().unwrap();
    assert_eq!(Some(ticks), datetime_to_ticks(&instant));
    assert_eq!(ticks, 621_355_968_000_000_000);
}

#[test]
fn test_timestamp_keeps_tick_precision() {
    let instant = DateTime::from_timestamp(1_700_000_000, 987_654_300).unwrap();
    let mut cursor = ByteCursor::new();
    cursor.write_timestamp(&instant).unwrap();
    cursor.rewind();
    assert_eq!(cursor.read_timestamp().unwrap(), instant);
}

#[test]
fn test_timestamp_local_is_same_instant() {
    let instant = Utc.with_ymd_and_hms(2001, 9, 9, 1, 46, 40).unwrap();
    let mut cursor = ByteCursor::new();
    cursor.write_timestamp(&instant).unwrap();
    cursor.rewind();
    let local = cursor.read_timestamp_local().unwrap();
    assert_eq!(local.with_timezone(&Utc), instant);
}

#[test]
fn test_truncated_timestamp_is_boundary() {
    let mut cursor = ByteCursor::from_vec(vec![0; 7]);
    assert!(cursor.read_timestamp().unwrap_err().is_boundary());
    assert_eq!(cursor.position(), 0);
}

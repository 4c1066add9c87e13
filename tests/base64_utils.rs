use codekeeper_bot::util::{decode, decode_bytes, encode, is_valid_base64};

#[test]
fn encode_is_standard_padded() {
    assert_eq!(encode("hello"), "aGVsbG8=");
    assert_eq!(encode(""), "");
    assert_eq!(encode("hé"), "aMOp");
}

#[test]
fn round_trip_preserves_text() {
    for text in ["", "a", "hello", "multi\nline\ttext", "ünïcødé 🚀", "fn main() {}"] {
        assert_eq!(decode(&encode(text)), text);
    }
}

#[test]
fn encoded_output_is_always_valid() {
    for text in ["", "x", "xy", "xyz", "some longer text with symbols !?&"] {
        assert!(is_valid_base64(&encode(text)), "{text:?}");
    }
}

#[test]
fn canonical_strings_are_valid() {
    assert!(is_valid_base64("aGVsbG8="));
    assert!(is_valid_base64("Zm9vYmFy"));
    assert!(is_valid_base64(""));
}

#[test]
fn non_canonical_strings_are_invalid() {
    assert!(!is_valid_base64("not base64 !!"));
    assert!(!is_valid_base64("not-base64!"));
    // Missing padding decodes fine but does not re-encode to itself.
    assert!(!is_valid_base64("aGVsbG8"));
    // Non-zero trailing bits.
    assert!(!is_valid_base64("aGVsbG9="));
    assert!(!is_valid_base64("aGVs bG8="));
}

#[test]
fn decode_is_permissive() {
    assert_eq!(decode("aGVsbG8"), "hello");
    assert_eq!(decode("aGVs\nbG8="), "hello");
    assert_eq!(decode("aGVsbG8=trailing"), "hello");
    assert_eq!(decode("-_-_"), decode("+/+/"));
    assert_eq!(decode_bytes("A"), Vec::<u8>::new());
    assert_eq!(decode("!!!"), "");
}

#[test]
fn decode_replaces_invalid_utf8() {
    // 0xff 0xfe is not UTF-8.
    assert_eq!(decode("//4="), "\u{FFFD}\u{FFFD}");
}

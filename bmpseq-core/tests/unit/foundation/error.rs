use super::*;

#[test]
fn decode_errors_are_per_image_skips() {
    assert!(BmpseqError::decode("bad signature").is_skip());
    assert!(!BmpseqError::validation("bad buffer").is_skip());
    assert!(!BmpseqError::from(anyhow::anyhow!("io")).is_skip());
}

#[test]
fn display_prefixes_category() {
    let e = BmpseqError::validation("plane length mismatch");
    assert_eq!(e.to_string(), "validation error: plane length mismatch");

    let e = BmpseqError::decode("missing BM signature");
    assert_eq!(e.to_string(), "decode error: missing BM signature");
}

use super::*;

#[test]
fn encode_then_decode_returns_original_text() {
    let text = "* SPICE netlist\nR1 in out 1k\n.end\n";
    assert_eq!(decode_content(&encode_content(text)).unwrap(), text);
}

#[test]
fn decode_content_trims_surrounding_whitespace() {
    let encoded = format!("  {}\n", encode_content("M1 d g s b nmos"));
    assert_eq!(decode_content(&encoded).unwrap(), "M1 d g s b nmos");
}

#[test]
fn decode_content_rejects_invalid_base64() {
    let err = decode_content("not base64!!").unwrap_err();
    assert!(err.contains("invalid base64"), "unexpected error: {err}");
}

#[test]
fn decode_content_rejects_non_utf8_payload() {
    // "/w==" decodes to the single byte 0xFF.
    let err = decode_content("/w==").unwrap_err();
    assert!(err.contains("not UTF-8"), "unexpected error: {err}");
}

//! Base64 handling for binary attributes.
//!
//! SCIM binary values arrive in the wild with embedded line breaks and with or
//! without `=` padding (X.509 certificate blobs are the usual offenders).
//! Decoding is tolerant of both; encoding always produces the single canonical
//! padded, newline-free form.

use crate::error::{ValidationError, ValidationResult};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Decode a base64 string, tolerating ASCII whitespace and missing padding.
pub fn decode_lenient(attribute: &str, input: &str) -> ValidationResult<Vec<u8>> {
    let mut cleaned: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    // strip any existing padding, then re-pad to a multiple of four
    while cleaned.ends_with('=') {
        cleaned.pop();
    }
    match cleaned.len() % 4 {
        0 => {}
        1 => {
            return Err(ValidationError::InvalidBinaryData {
                attribute: attribute.to_string(),
                details: "truncated base64 value".to_string(),
            });
        }
        n => cleaned.extend(std::iter::repeat_n('=', 4 - n)),
    }
    STANDARD
        .decode(&cleaned)
        .map_err(|e| ValidationError::InvalidBinaryData {
            attribute: attribute.to_string(),
            details: e.to_string(),
        })
}

/// Encode bytes as canonical base64: padded, no line breaks.
pub fn encode_canonical(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Re-encode a wire value into its canonical form, validating it on the way.
pub fn canonicalize(attribute: &str, input: &str) -> ValidationResult<String> {
    decode_lenient(attribute, input).map(|bytes| encode_canonical(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_variants_agree() {
        let canonical = encode_canonical(b"hello world!");
        let no_padding = canonical.trim_end_matches('=').to_string();
        let with_newlines = format!("{}\n{}", &canonical[..8], &canonical[8..]);

        let expected = decode_lenient("data", &canonical).unwrap();
        assert_eq!(decode_lenient("data", &no_padding).unwrap(), expected);
        assert_eq!(decode_lenient("data", &with_newlines).unwrap(), expected);
        assert_eq!(expected, b"hello world!");
    }

    #[test]
    fn test_encode_is_canonical() {
        let bytes = decode_lenient("data", "aGVsbG8").unwrap();
        let encoded = encode_canonical(&bytes);
        assert_eq!(encoded, "aGVsbG8=");
        assert!(!encoded.contains('\n'));
    }

    #[test]
    fn test_canonicalize_round_trip() {
        assert_eq!(canonicalize("data", "aGVs\nbG8=").unwrap(), "aGVsbG8=");
    }

    #[test]
    fn test_invalid_input_rejected() {
        assert!(decode_lenient("data", "not base64!!").is_err());
        // single trailing character can never be valid
        assert!(decode_lenient("data", "aGVsbG8xy").is_err());
    }
}

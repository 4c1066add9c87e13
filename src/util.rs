//! Base64 helpers shared by the command handlers.
//!
//! Decoding is deliberately lenient: characters outside the alphabet are skipped,
//! URL-safe characters are folded into the standard alphabet, padding is optional
//! and input stops at the first `=`. Validation is strict: a string is valid only
//! when re-encoding its decoded bytes reproduces it exactly.
use base64::Engine as _;
use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Standard padded base64 of the text's UTF-8 bytes.
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Best-effort decode to raw bytes. Never fails; garbage in yields whatever
/// bytes the recognisable sextets describe.
pub fn decode_bytes(input: &str) -> Vec<u8> {
    let mut cleaned: String = input
        .chars()
        .take_while(|c| *c != '=')
        .filter_map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '+' | '/' => Some(c),
            '-' => Some('+'),
            '_' => Some('/'),
            _ => None,
        })
        .collect();
    // A lone trailing sextet carries no complete byte.
    if cleaned.len() % 4 == 1 {
        cleaned.pop();
    }
    LENIENT.decode(cleaned.as_bytes()).unwrap_or_default()
}

/// Best-effort decode to text; invalid UTF-8 sequences become U+FFFD.
pub fn decode(input: &str) -> String {
    String::from_utf8_lossy(&decode_bytes(input)).into_owned()
}

/// True iff `input` is already canonical padded standard base64.
pub fn is_valid_base64(input: &str) -> bool {
    STANDARD.encode(decode_bytes(input)) == input
}

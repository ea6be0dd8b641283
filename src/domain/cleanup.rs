//! Freeform text normalization
//!
//! Repairs mis-decoded Unicode and transliterates the rest to ASCII.
//! Line breaks, URLs, digits, currency and punctuation pass through as-is.

use std::borrow::Cow;

use deunicode::deunicode_with_tofu;

/// Normalize captured process text.
///
/// Idempotent: ASCII input is returned unchanged.
pub fn clean_text(raw: &str) -> String {
    if raw.is_ascii() {
        return raw.to_string();
    }
    let repaired = repair_mojibake(raw);
    // U+FFFD marks bytes that were already lost during decoding
    let repaired = repaired.replace('\u{FFFD}', "");
    deunicode_with_tofu(&repaired, "")
}

/// Undo UTF-8 text that was decoded as Latin-1 / Windows-1252 (`cafÃ©` → `café`).
///
/// Only applied when every char maps back to a single byte and those bytes
/// form valid UTF-8; otherwise the text is returned untouched.
fn repair_mojibake(text: &str) -> Cow<'_, str> {
    let bytes: Option<Vec<u8>> = text.chars().map(single_byte).collect();
    match bytes.map(String::from_utf8) {
        Some(Ok(fixed)) if fixed != text => Cow::Owned(fixed),
        _ => Cow::Borrowed(text),
    }
}

/// Byte value of `c` in Windows-1252 (Latin-1 for the ranges they share).
fn single_byte(c: char) -> Option<u8> {
    let byte = match c {
        '\u{0000}'..='\u{007F}' | '\u{00A0}'..='\u{00FF}' => c as u32 as u8,
        // C1 controls survive some decoders unchanged
        '\u{0080}'..='\u{009F}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

//! Windows-1252 encoding for PDF text objects
//!
//! The credential uses the built-in Helvetica fonts with WinAnsiEncoding,
//! so text drawn into the content stream must be Windows-1252 bytes.
//! Spanish names (accents, ñ, °) map cleanly; anything unmappable is
//! replaced with '?' rather than failing the whole render.

/// Encode a string as Windows-1252 bytes
///
/// Characters outside the code page become '?'. Encoding is done per
/// character because `encoding_rs` would otherwise emit numeric character
/// references for unmappable input.
pub fn encode_win_ansi(s: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(s.len());
    for c in s.chars() {
        let mut buf = [0u8; 4];
        let (bytes, _, had_errors) = encoding_rs::WINDOWS_1252.encode(c.encode_utf8(&mut buf));
        if had_errors {
            result.push(b'?');
        } else {
            result.extend_from_slice(&bytes);
        }
    }
    result
}

//! Reads generated sources back into bytes.

use crate::error::ExtractError;

/// Parses the byte array named `array_symbol` out of a generated source.
pub fn extract_bytes(source: &str, array_symbol: &str) -> Result<Vec<u8>, ExtractError> {
    let marker = format!("{}[] = {{", array_symbol);
    let start = find_symbol(source, &marker)
        .ok_or_else(|| ExtractError::MissingArray(array_symbol.to_string()))?
        + marker.len();

    let rest = &source[start..];
    let end = rest
        .find('}')
        .ok_or_else(|| ExtractError::UnterminatedArray(array_symbol.to_string()))?;
    let body = rest[..end].trim();

    if body.is_empty() {
        return Ok(Vec::new());
    }

    body.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(index, token)| {
            parse_byte_token(token).ok_or_else(|| ExtractError::InvalidToken {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parses the value of the size constant named `size_symbol`.
pub fn extract_size(source: &str, size_symbol: &str) -> Result<usize, ExtractError> {
    let marker = format!("{} = ", size_symbol);
    let missing = || ExtractError::MissingSize(size_symbol.to_string());

    let start = find_symbol(source, &marker).ok_or_else(missing)? + marker.len();
    let rest = &source[start..];
    let end = rest.find(';').ok_or_else(missing)?;
    rest[..end].trim().parse().map_err(|_| missing())
}

/// Parses a single `0xHH` token.
pub fn parse_byte_token(token: &str) -> Option<u8> {
    let digits = token.strip_prefix("0x")?;
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

/// Finds `marker` where it is not the tail of a longer identifier.
fn find_symbol(source: &str, marker: &str) -> Option<usize> {
    source.match_indices(marker).map(|(i, _)| i).find(|&i| {
        source[..i]
            .chars()
            .next_back()
            .map_or(true, |c| !(c.is_ascii_alphanumeric() || c == '_'))
    })
}

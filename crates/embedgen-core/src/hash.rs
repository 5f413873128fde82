//! Content hashing for embedded assets.

/// Computes the BLAKE3 hash of `data`.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
///
/// # Example
/// ```
/// use embedgen_core::hash::content_hash;
///
/// let hash = content_hash(b"ID3");
/// assert_eq!(hash.len(), 64);
/// ```
pub fn content_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

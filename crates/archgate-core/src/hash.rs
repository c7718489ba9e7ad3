use xxhash_rust::xxh64::xxh64;

use crate::types::TypeDescriptor;

const BASE62_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Encode a u64 value as a base62 string (11 chars, zero-padded).
fn base62_encode(mut value: u64) -> String {
    let mut result = [b'0'; 11];
    let mut i = result.len();
    while value > 0 && i > 0 {
        i -= 1;
        result[i] = BASE62_CHARS[(value % 62) as usize];
        value /= 62;
    }
    result.iter().map(|&b| b as char).collect()
}

/// Fingerprint of arbitrary bytes: base62(xxhash64(bytes)).
pub fn fingerprint(bytes: &[u8]) -> String {
    base62_encode(xxh64(bytes, 0))
}

/// Fingerprint of a catalog's content.
///
/// The input is the canonical JSON of every descriptor in declaration order,
/// separated by NUL and prefixed with the assembly name, so two snapshots with
/// the same declarations in the same order always produce the same value.
pub fn catalog_fingerprint(assembly: &str, types: &[TypeDescriptor]) -> String {
    let mut input = Vec::with_capacity(64 * types.len() + assembly.len() + 1);
    input.extend_from_slice(assembly.as_bytes());
    for ty in types {
        input.push(0);
        // Serializing plain data structs into a Vec cannot fail.
        if let Ok(bytes) = serde_json::to_vec(ty) {
            input.extend_from_slice(&bytes);
        }
    }
    fingerprint(&input)
}

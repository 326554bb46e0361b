//! Host string hashing for decoration keys
//!
//! The native layer identifies collections and decorations by the Jenkins
//! one-at-a-time hash of the lowercased name.

/// Jenkins one-at-a-time hash over the ASCII-lowercased bytes of `name`
pub fn joaat(name: &str) -> u32 {
    let mut hash: u32 = 0;
    for byte in name.bytes() {
        hash = hash.wrapping_add(u32::from(byte.to_ascii_lowercase()));
        hash = hash.wrapping_add(hash << 10);
        hash ^= hash >> 6;
    }
    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash.wrapping_add(hash << 15)
}

//! MD5 hashing helper

use md5::{Digest, Md5};

/// Returns the lowercase hex MD5 digest of `data`.
pub fn md5_hex(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}

/// Returns the lowercase hex MD5 digest of `s`.
pub fn md5_hex_str(s: &str) -> String {
    md5_hex(s.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(
            md5_hex_str("The quick brown fox jumps over the lazy dog"),
            "9e107d9d372bb6826bd81d3542a419d6"
        );
    }

    #[test]
    fn test_str_matches_bytes() {
        assert_eq!(md5_hex_str("hello"), md5_hex(b"hello"));
    }
}

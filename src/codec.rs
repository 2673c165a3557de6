//! Order-preserving key codec for byte-keyed structures.
//!
//! The trie compares keys byte by byte, so an integer key is stored
//! most-significant byte first. For any `a < b`, `encode_key(a) < encode_key(b)`
//! under lexicographic byte comparison, independent of host byte order.
//!
//! Build and lookup paths must both go through [`encode_key`].

/// Width of an encoded key in bytes.
pub const KEY_LEN: usize = std::mem::size_of::<u64>();

/// Encoded form of a `u64` key.
pub type EncodedKey = [u8; KEY_LEN];

/// Encode a key as fixed-width big-endian bytes.
#[inline]
pub fn encode_key(key: u64) -> EncodedKey {
    key.to_be_bytes()
}

/// Decode a key produced by [`encode_key`].
#[inline]
pub fn decode_key(bytes: EncodedKey) -> u64 {
    u64::from_be_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_significant_byte_first() {
        assert_eq!(encode_key(0), [0; 8]);
        assert_eq!(encode_key(1), [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(encode_key(0x0102_0304_0506_0708), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(encode_key(u64::MAX), [0xFF; 8]);
    }

    #[test]
    fn test_order_across_byte_boundaries() {
        // Little-endian bytes would order 256 before 1.
        let keys = [0u64, 1, 255, 256, 257, 65_535, 65_536, 1 << 32, u64::MAX - 1, u64::MAX];
        for pair in keys.windows(2) {
            assert!(
                encode_key(pair[0]) < encode_key(pair[1]),
                "{} must encode below {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_decode_inverts_encode() {
        for key in [0u64, 42, 1 << 40, u64::MAX] {
            assert_eq!(decode_key(encode_key(key)), key);
        }
    }
}

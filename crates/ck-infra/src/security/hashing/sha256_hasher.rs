use ck_core::ports::ContentHashPort;
use ck_core::{ContentHash, HashError};
use sha2::{Digest, Sha256};

pub struct Sha256Hasher;

impl ContentHashPort for Sha256Hasher {
    fn hash_bytes(&self, bytes: &[u8]) -> Result<ContentHash, HashError> {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Ok(ContentHash::sha256(hasher.finalize().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ck_core::HashAlgorithm;

    #[test]
    fn identical_bytes_hash_identically() {
        let a = Sha256Hasher.hash_bytes(b"same image bytes").unwrap();
        let b = Sha256Hasher.hash_bytes(b"same image bytes").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.alg, HashAlgorithm::Sha256V1);
    }

    #[test]
    fn single_byte_difference_changes_hash() {
        let a = Sha256Hasher.hash_bytes(&[0u8, 1, 2, 3]).unwrap();
        let b = Sha256Hasher.hash_bytes(&[0u8, 1, 2, 4]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn matches_known_digest() {
        let hash = Sha256Hasher.hash_bytes(b"abc").unwrap();
        assert_eq!(
            hash.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn empty_input_still_has_fixed_length() {
        let hash = Sha256Hasher.hash_bytes(&[]).unwrap();
        assert_eq!(hash.to_string().len(), 64);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    Sha256V1,
}

/// Fixed-size digest of encoded content, used for image dedup.
///
/// Displays as a 64 character lowercase hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash {
    pub alg: HashAlgorithm,
    pub bytes: [u8; 32],
}

impl ContentHash {
    pub fn sha256(bytes: [u8; 32]) -> Self {
        Self {
            alg: HashAlgorithm::Sha256V1,
            bytes,
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_fixed_length_hex() {
        let hash = ContentHash::sha256([0xab; 32]);
        let shown = hash.to_string();
        assert_eq!(shown.len(), 64);
        assert!(shown.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(shown.starts_with("abab"));
    }

    #[test]
    fn equality_depends_on_bytes() {
        let a = ContentHash::sha256([1; 32]);
        let mut other = [1; 32];
        other[31] = 2;
        assert_eq!(a, ContentHash::sha256([1; 32]));
        assert_ne!(a, ContentHash::sha256(other));
    }
}

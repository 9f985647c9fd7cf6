use crate::clipboard::{ContentHash, HashError};

pub trait ContentHashPort: Send + Sync {
    fn hash_bytes(&self, bytes: &[u8]) -> Result<ContentHash, HashError>;
}

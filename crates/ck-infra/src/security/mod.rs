mod hashing;

pub use hashing::Sha256Hasher;

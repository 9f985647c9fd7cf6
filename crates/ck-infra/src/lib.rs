pub mod codec;
pub mod fs;
pub mod security;
pub mod time;

pub use codec::PngImageCodec;
pub use fs::FileEntryExporter;
pub use security::Sha256Hasher;
pub use time::SystemClock;

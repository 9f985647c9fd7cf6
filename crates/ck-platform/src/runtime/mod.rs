mod polling;

pub use polling::{PollingClipboardRuntime, DEFAULT_POLL_INTERVAL};

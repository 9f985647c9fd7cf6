mod local;

pub use local::LocalClipboard;

mod accessor;
mod change_detector;

pub use accessor::ClipboardAccessor;
pub use change_detector::ChangeDetector;

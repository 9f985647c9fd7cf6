mod store;

pub use store::{HistoryEvent, HistoryStore};

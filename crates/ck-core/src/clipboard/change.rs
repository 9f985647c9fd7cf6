use crate::ids::EntryId;

/// Outcome of one clipboard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectedChange {
    NewText(EntryId),
    NewImage(EntryId),
    Unchanged,
}

impl DetectedChange {
    pub fn is_new_entry(&self) -> bool {
        !matches!(self, DetectedChange::Unchanged)
    }

    pub fn entry_id(&self) -> Option<&EntryId> {
        match self {
            DetectedChange::NewText(id) | DetectedChange::NewImage(id) => Some(id),
            DetectedChange::Unchanged => None,
        }
    }
}

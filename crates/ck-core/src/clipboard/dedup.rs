use super::ContentHash;

/// Last-seen clipboard content, used to tell a real change from a re-read.
///
/// At most one of the two fields is meaningful: remembering text forgets the
/// image hash and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupState {
    last_text: Option<String>,
    last_image_hash: Option<ContentHash>,
}

impl DedupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-empty text that differs from the last remembered text.
    pub fn is_new_text(&self, text: &str) -> bool {
        !text.is_empty() && self.last_text.as_deref() != Some(text)
    }

    pub fn is_new_image(&self, hash: &ContentHash) -> bool {
        self.last_image_hash.as_ref() != Some(hash)
    }

    pub fn remember_text(&mut self, text: impl Into<String>) {
        self.last_text = Some(text.into());
        self.last_image_hash = None;
    }

    pub fn remember_image(&mut self, hash: ContentHash) {
        self.last_image_hash = Some(hash);
        self.last_text = None;
    }

    pub fn last_text(&self) -> Option<&str> {
        self.last_text.as_deref()
    }

    pub fn last_image_hash(&self) -> Option<&ContentHash> {
        self.last_image_hash.as_ref()
    }
}

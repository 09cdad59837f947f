use crate::error::Result;
use crate::git::TagSource;

/// Tag source backed by an in-memory list, returned in insertion order
#[derive(Debug, Clone, Default)]
pub struct MockTagSource {
    tags: Vec<String>,
}

impl MockTagSource {
    /// Create a new empty mock tag source
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mock from tags that are already ordered highest-first
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTagSource {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a tag at the lowest position
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }
}

impl TagSource for MockTagSource {
    fn list_tags_by_version(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }
}

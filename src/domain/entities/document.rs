//! Document entity
//!
//! An HTML page loaded from disk, identified by its path.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// A text document under rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    content: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn hash(&self) -> ContentHash {
        ContentHash::from_content(&self.content)
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

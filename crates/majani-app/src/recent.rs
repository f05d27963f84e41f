// Rust guideline compliant 2026-10-12

//! Recently viewed listings.

use crate::error::Result;
use majani_core::Listing;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Most-recent-first history of viewed listing IDs, unique and capped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentViews {
    ids: Vec<String>,
    #[serde(skip, default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    20
}

impl RecentViews {
    /// Creates an empty history holding at most `limit` entries.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            ids: Vec::new(),
            limit,
        }
    }

    /// Loads the history stored at `path`, or an empty one if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path, limit: usize) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new(limit));
        }

        let content = std::fs::read_to_string(path)?;
        let mut recent: Self =
            serde_json::from_str(&content).map_err(majani_core::Error::from)?;
        recent.limit = limit;
        recent.ids.truncate(limit);
        Ok(recent)
    }

    /// Writes the history to `path` through a temp file and rename.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let temp_path = path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(self).map_err(majani_core::Error::from)?;
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, path)?;
        Ok(())
    }

    /// Records a view of `id`, moving it to the front.
    pub fn push(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
        self.ids.insert(0, id.to_string());
        self.ids.truncate(self.limit);
    }

    /// Viewed IDs, most recent first.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Resolves the history against `listings`, skipping IDs no longer present.
    #[must_use]
    pub fn resolve<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        self.ids
            .iter()
            .filter_map(|id| listings.iter().find(|l| &l.id == id))
            .collect()
    }
}

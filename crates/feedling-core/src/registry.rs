use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::feed::FeedEntry;
use crate::{Error, Result};

/// Category used when `.add` is given none.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// Category-partitioned store of subscribed feeds.
///
/// Storage is keyed by category, but an entry's `name` is a registry-wide
/// identity: name lookups scan every category and take the first
/// case-insensitive match. A category whose entry list becomes empty is
/// deleted, never kept around empty. Serialized transparently, so the
/// persisted file is the flat `{ category: [ {name, link}, ... ] }` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    categories: BTreeMap<String, Vec<FeedEntry>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the registry from `path`.
    ///
    /// A missing or unreadable file, or one that does not parse as the
    /// expected shape, yields an empty registry. This never fails: the
    /// session always starts with something usable.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Could not read {}, starting empty: {}", path.display(), err);
                }
                return Self::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(registry) => registry,
            Err(err) => {
                tracing::warn!("Malformed registry in {}, starting empty: {}", path.display(), err);
                Self::new()
            }
        }
    }

    /// Write the registry to `path` as pretty-printed JSON.
    ///
    /// On failure the file is left as it was and the in-memory registry
    /// stays authoritative; the caller reports the error and carries on.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved registry to {}", path.display());
        Ok(())
    }

    /// Add a feed under `category` (default `"uncategorized"`).
    ///
    /// The link must parse as an absolute URL; the entry name is derived
    /// from its host. Duplicate names are not rejected here — uniqueness is
    /// only enforced by lookups stopping at the first match.
    pub fn add(&mut self, link: &str, category: Option<&str>) -> Result<()> {
        let url = Url::parse(link)?;
        let name = url.host_str().unwrap_or_default().to_string();
        let category = category.unwrap_or(DEFAULT_CATEGORY);

        self.categories
            .entry(category.to_string())
            .or_default()
            .push(FeedEntry {
                name,
                link: link.to_string(),
            });
        Ok(())
    }

    /// Remove every entry whose name case-insensitively equals `name`, in
    /// every category it appears in, pruning categories left empty.
    ///
    /// An unknown name is a silent no-op; the removed count is returned so
    /// the caller can log it, but it is never an error.
    pub fn remove(&mut self, name: &str) -> usize {
        let mut removed = 0;
        self.categories.retain(|_, entries| {
            entries.retain(|entry| {
                if entry.name.eq_ignore_ascii_case(name) {
                    removed += 1;
                    false
                } else {
                    true
                }
            });
            !entries.is_empty()
        });
        removed
    }

    /// Move the first entry matching `name` to `new_category`.
    ///
    /// The entry is re-added through the add path, so its name is recomputed
    /// from the link rather than carried over. Fails with `NotFound` when
    /// nothing matches, and with `InvalidUrl` when the stored link no longer
    /// parses; in both cases the registry is untouched.
    pub fn change_category(&mut self, name: &str, new_category: &str) -> Result<()> {
        let link = self
            .find(name)
            .map(|entry| entry.link.clone())
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        // Validate up front so a corrupted persisted link cannot leave the
        // entry removed but not re-added.
        Url::parse(&link)?;

        self.remove_first(name);
        self.add(&link, Some(new_category))
    }

    /// First case-insensitive name match across all categories.
    pub fn find(&self, name: &str) -> Option<&FeedEntry> {
        self.categories
            .values()
            .flatten()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Entries of one category, numbered from 1. An absent category yields
    /// an empty iterator.
    pub fn entries<'a>(&'a self, category: &str) -> impl Iterator<Item = (usize, &'a FeedEntry)> {
        self.categories
            .get(category)
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(idx, entry)| (idx + 1, entry))
    }

    /// All categories with their entries, in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FeedEntry])> {
        self.categories
            .iter()
            .map(|(category, entries)| (category.as_str(), entries.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn remove_first(&mut self, name: &str) {
        let mut emptied = None;
        for (category, entries) in self.categories.iter_mut() {
            if let Some(pos) = entries
                .iter()
                .position(|entry| entry.name.eq_ignore_ascii_case(name))
            {
                entries.remove(pos);
                if entries.is_empty() {
                    emptied = Some(category.clone());
                }
                break;
            }
        }
        if let Some(category) = emptied {
            self.categories.remove(&category);
        }
    }
}

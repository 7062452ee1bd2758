//! Classification of directory entries into ordering keys.

use regex::Regex;

/// Ordering key for a selected file.
///
/// Numeric names sort ascending by value; everything else sorts after
/// every numeric name. Ties (all `Unmatched` in particular) keep their
/// original listing order because callers sort stably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Numeric(u64),
    Unmatched,
}

/// A file selected by the extension filter, with its ordering key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: SortKey,
    pub name: String,
}

/// Case-insensitive matcher for `<integer>.<ext>` filenames.
///
/// The extension selects which files participate at all; the anchored
/// numeric pattern decides whether a selected file gets a numeric key
/// or the trailing sentinel.
#[derive(Debug, Clone)]
pub struct NamePattern {
    extension: String,
    dot_extension: String,
    numeric: Regex,
}

impl NamePattern {
    /// Build a pattern for the given extension (leading dot optional).
    pub fn new(extension: &str) -> Result<Self, regex::Error> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        let numeric = Regex::new(&format!(r"(?i)^(\d+)\.{}$", regex::escape(&extension)))?;
        Ok(Self {
            dot_extension: format!(".{extension}"),
            extension,
            numeric,
        })
    }

    /// The configured extension, lowercase, without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether the filename carries the configured extension.
    pub fn selects(&self, name: &str) -> bool {
        name.to_ascii_lowercase().ends_with(&self.dot_extension)
    }

    /// Classify a filename, or `None` if the extension filter skips it.
    pub fn classify(&self, name: &str) -> Option<Entry> {
        if !self.selects(name) {
            return None;
        }
        Some(Entry {
            key: self.sort_key(name),
            name: name.to_string(),
        })
    }

    /// Ordering key for a filename.
    ///
    /// Integers too wide for `u64` are treated like any other
    /// non-numeric name.
    pub fn sort_key(&self, name: &str) -> SortKey {
        let Some(caps) = self.numeric.captures(name) else {
            return SortKey::Unmatched;
        };
        caps.get(1)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .map_or(SortKey::Unmatched, SortKey::Numeric)
    }
}

impl Default for NamePattern {
    /// The `.jpg` filter.
    fn default() -> Self {
        Self::new("jpg").expect("valid fixed pattern")
    }
}

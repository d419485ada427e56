use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_SITE_ROOT: &str = "https://wikipedia.org";

/// Canonical link for an entry: `{site_root}/wiki/{entry}`. No encoding or validation.
pub fn page_url(site_root: &str, entry: &str) -> String {
    format!("{}/wiki/{}", site_root.trim_end_matches('/'), entry)
}

/// A named group of raw text entries presented to the indexer together.
pub trait Collection {
    fn name(&self) -> &str;
    /// Entry identifiers in the order they should be indexed.
    fn entries(&self) -> io::Result<Vec<String>>;
    fn read(&self, entry: &str) -> io::Result<String>;
}

/// Every regular file directly inside a directory, in `read_dir` order.
#[derive(Debug, Clone)]
pub struct DirectoryCollection {
    name: String,
    path: PathBuf,
}

impl DirectoryCollection {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }

    pub fn path(&self) -> &Path { &self.path }
}

impl Collection for DirectoryCollection {
    fn name(&self) -> &str { &self.name }

    fn entries(&self) -> io::Result<Vec<String>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            if entry.path().is_file() {
                entries.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(entries)
    }

    fn read(&self, entry: &str) -> io::Result<String> {
        fs::read_to_string(self.path.join(entry))
    }
}

/// In-memory collection; entries are indexed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCollection {
    name: String,
    entries: Vec<(String, String)>,
}

impl MemoryCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), entries: Vec::new() }
    }

    /// Adds an entry. An entry with the same name is replaced in place, like
    /// overwriting a file in a directory.
    pub fn with_entry(mut self, entry: impl Into<String>, text: impl Into<String>) -> Self {
        let (entry, text) = (entry.into(), text.into());
        match self.entries.iter().position(|(e, _)| *e == entry) {
            Some(i) => self.entries[i].1 = text,
            None => self.entries.push((entry, text)),
        }
        self
    }
}

impl Collection for MemoryCollection {
    fn name(&self) -> &str { &self.name }

    fn entries(&self) -> io::Result<Vec<String>> {
        Ok(self.entries.iter().map(|(e, _)| e.clone()).collect())
    }

    fn read(&self, entry: &str) -> io::Result<String> {
        self.entries
            .iter()
            .find(|(e, _)| e == entry)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no entry {entry}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_template() {
        assert_eq!(page_url(DEFAULT_SITE_ROOT, "Rust_(programming_language)"), "https://wikipedia.org/wiki/Rust_(programming_language)");
        assert_eq!(page_url("http://localhost:9000/", "Chess"), "http://localhost:9000/wiki/Chess");
    }

    #[test]
    fn directory_name_is_last_component() {
        let c = DirectoryCollection::new("data/wikipedia/Words/Games");
        assert_eq!(c.name(), "Games");
    }

    #[test]
    fn memory_collection_preserves_order() {
        let c = MemoryCollection::new("m").with_entry("b", "x").with_entry("a", "y");
        assert_eq!(c.entries().unwrap(), ["b", "a"]);
        assert_eq!(c.read("a").unwrap(), "y");
        assert_eq!(c.read("zzz").unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn duplicate_entry_name_replaces_text() {
        let c = MemoryCollection::new("m").with_entry("A", "cat").with_entry("B", "x").with_entry("A", "dog");
        assert_eq!(c.entries().unwrap(), ["A", "B"]);
        assert_eq!(c.read("A").unwrap(), "dog");
    }
}

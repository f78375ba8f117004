use super::Store;
use crate::Score;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// On-disk document holding the saved values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
struct Document {
    #[serde(default)]
    high_score: Score,
}

/// JSON file store. A missing or unreadable file reads as 0.
#[derive(Debug, Clone)]
pub struct Disk {
    path: PathBuf,
    cache: Score,
}

impl Disk {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let cache = match Self::read(&path) {
            Ok(document) => document.high_score,
            Err(e) => {
                log::debug!("[disk] starting fresh at {}: {:#}", path.display(), e);
                0
            }
        };
        Self { path, cache }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    /// Default location under the current directory.
    pub fn default_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_default()
            .join("saves")
            .join("rochambeau.json")
    }

    fn read(path: &Path) -> anyhow::Result<Document> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
    }
    fn write(&self, document: &Document) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(document)?;
        std::fs::write(&self.path, text).with_context(|| format!("write {}", self.path.display()))
    }
}

impl Store for Disk {
    fn high_score(&self) -> Score {
        self.cache
    }
    fn set_high_score(&mut self, score: Score) -> anyhow::Result<()> {
        self.write(&Document { high_score: score })?;
        self.cache = score;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rochambeau-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir.join("save.json")
    }

    #[test]
    fn missing_file_reads_zero() {
        let store = Disk::open(scratch("missing"));
        assert_eq!(store.high_score(), 0);
    }

    #[test]
    fn survives_reopen() {
        let path = scratch("reopen");
        let mut store = Disk::open(&path);
        store.set_high_score(12).unwrap();
        assert_eq!(Disk::open(&path).high_score(), 12);
    }

    #[test]
    fn corrupt_file_reads_zero() {
        let path = scratch("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(Disk::open(&path).high_score(), 0);
    }

    #[test]
    fn failed_write_keeps_cache() {
        let dir = scratch("blocked");
        std::fs::create_dir_all(&dir).unwrap();
        let mut store = Disk::open(&dir);
        store.set_high_score(3).unwrap_err();
        assert_eq!(store.high_score(), 0);
    }
}

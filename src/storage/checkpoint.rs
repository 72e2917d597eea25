//! Seen-set checkpoint file.
//!
//! Plain text, one integer id per line. A missing file is an empty set.
//! Writes are a plain overwrite; the run is invoked manually and
//! infrequently, so mid-write corruption is an accepted risk.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{AppError, Result};

/// Set of sequence ids that have already been announced.
///
/// Backed by a `BTreeSet` so the checkpoint file is written in a stable,
/// ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenSet {
    ids: BTreeSet<u64>,
}

impl SeenSet {
    /// Create an empty seen-set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the seen-set from a checkpoint file.
    ///
    /// A missing file yields an empty set. Blank lines are skipped;
    /// any other non-integer line is a checkpoint error.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No checkpoint at {}, starting fresh", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        let mut ids = BTreeSet::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let id: u64 = line.parse().map_err(|_| {
                AppError::checkpoint(format!(
                    "invalid id {:?} in {}",
                    line,
                    path.display()
                ))
            })?;
            ids.insert(id);
        }

        Ok(Self { ids })
    }

    /// Overwrite the checkpoint file with one id per line, ascending.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut content = String::new();
        for id in &self.ids {
            content.push_str(&id.to_string());
            content.push('\n');
        }
        tokio::fs::write(path.as_ref(), content).await?;
        Ok(())
    }

    /// Check whether an id has been seen before.
    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Record an id as seen. Returns true if it was not already present.
    pub fn insert(&mut self, id: u64) -> bool {
        self.ids.insert(id)
    }

    /// Number of seen ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over seen ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<u64> for SeenSet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prev.txt");

        let seen = SeenSet::load(&path).await.unwrap();
        assert!(seen.is_empty());
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prev.txt");

        let seen: SeenSet = [3, 1, 2].into_iter().collect();
        seen.save(&path).await.unwrap();

        let loaded = SeenSet::load(&path).await.unwrap();
        assert_eq!(loaded, seen);
        assert_eq!(loaded.len(), 3);
    }

    #[tokio::test]
    async fn test_save_writes_ascending_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prev.txt");

        let seen: SeenSet = [30, 10, 20].into_iter().collect();
        seen.save(&path).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "10\n20\n30\n");
    }

    #[tokio::test]
    async fn test_load_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prev.txt");
        tokio::fs::write(&path, "1\n\n2\n   \n3\n").await.unwrap();

        let seen = SeenSet::load(&path).await.unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen.contains(2));
    }

    #[tokio::test]
    async fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prev.txt");
        tokio::fs::write(&path, "1\nnot-a-number\n").await.unwrap();

        assert!(SeenSet::load(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prev.txt");

        let first: SeenSet = [1, 2, 3].into_iter().collect();
        first.save(&path).await.unwrap();

        let second: SeenSet = [9].into_iter().collect();
        second.save(&path).await.unwrap();

        let loaded = SeenSet::load(&path).await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains(9));
        assert!(!loaded.contains(1));
    }
}

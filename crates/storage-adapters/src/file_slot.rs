//! Local filesystem implementation of `KeyValueSlot`.
//!
//! Every key maps to `<root>/<key>.json`. Writes go through a sibling temp
//! file and a rename so a crash mid-write leaves the previous value intact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use async_trait::async_trait;
use domains::KeyValueSlot;
use tokio::fs;
use tracing::debug;

pub struct FileSlot {
    /// Directory holding one file per key (e.g. "./data")
    root_path: PathBuf,
}

impl FileSlot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }

    /// Resolves a key to its file, rejecting anything that could escape the root.
    pub fn key_path(&self, key: &str) -> anyhow::Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            bail!("invalid storage key '{key}'");
        }
        Ok(self.root_path.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueSlot for FileSlot {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("reading {}", path.display())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let target_path = self.key_path(key)?;

        // 1. Ensure directory exists
        fs::create_dir_all(&self.root_path)
            .await
            .with_context(|| format!("creating {}", self.root_path.display()))?;

        // 2. Write next to the target, then swap it in
        let tmp_path = target_path.with_extension("json.tmp");
        fs::write(&tmp_path, value)
            .await
            .with_context(|| format!("writing {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &target_path)
            .await
            .with_context(|| format!("replacing {}", target_path.display()))?;

        debug!(key, bytes = value.len(), path = %target_path.display(), "slot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path());
        assert_eq!(slot.get("items.v1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("nested"));

        slot.set("items.v1", "[]").await.unwrap();
        assert_eq!(slot.get("items.v1").await.unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested/items.v1.json").exists());
        assert!(!dir.path().join("nested/items.v1.json.tmp").exists());

        slot.set("items.v1", "[1]").await.unwrap();
        assert_eq!(slot.get("items.v1").await.unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_key_validation() {
        let slot = FileSlot::new("/tmp/hicki");
        assert!(slot.key_path("items.v1").is_ok());
        assert!(slot.key_path("items-v2_b").is_ok());
        assert!(slot.key_path("").is_err());
        assert!(slot.key_path("../etc/passwd").is_err());
        assert!(slot.key_path(".hidden").is_err());
        assert!(slot.key_path("a/b").is_err());
    }

    #[tokio::test]
    async fn test_invalid_key_fails_both_ways() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path());
        assert!(slot.get("../x").await.is_err());
        assert!(slot.set("../x", "{}").await.is_err());
    }
}

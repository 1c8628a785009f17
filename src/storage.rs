//! キー・バリュー永続化
//!
//! お気に入りなどの小さな状態を文字列キーで保存する抽象化レイヤー。
//! テスト時は MemoryStore / FailingStore を注入する。
//! 本番コードでは FileStore（データディレクトリ下の JSON オブジェクト）を使用する。

use crate::error::{AilpError, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// キー・バリューストアを抽象化するトレイト
pub trait KeyValueStore: Send + Sync {
    /// 値を取得（未設定なら None）
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// 値を設定（既存値は上書き）
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// 単一の JSON オブジェクトファイルに保存するストア
///
/// ファイルは `{"key": "value", ...}` 形式。
/// 壊れたファイルは空として扱い、次の書き込みで置き換える。
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring malformed storage file");
                Ok(BTreeMap::new())
            }
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)?;

        // 一時ファイルに書いてから置き換える
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            AilpError::Storage(format!(
                "failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;

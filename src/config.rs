//! アプリケーション設定（config.toml）
//!
//! `$AILP_HOME/config.toml` から読み込む（パスの決定は呼び出し側）。ファイルがなければ既定値を使う。

use crate::error::{AilpError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 設定ファイル名
pub const CONFIG_FILE: &str = "config.toml";

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// コピー完了表示を維持する時間（ミリ秒）
    pub copy_feedback_ms: u64,
    /// フォルダ一覧画面に表示する最新動画の件数
    pub latest_videos: usize,
    /// ローカルストレージのファイル名（データディレクトリ相対）
    pub storage_file: String,
    /// tracing のフィルタ（`AILP_LOG` / `RUST_LOG` が優先）
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            copy_feedback_ms: 2000,
            latest_videos: 6,
            storage_file: "storage.json".to_string(),
            log_filter: None,
        }
    }
}

impl Config {
    /// 指定パスから読み込む
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.storage_file.trim().is_empty() {
            return Err(AilpError::Config("storage_file cannot be empty".to_string()));
        }
        if self.storage_file.contains("..") {
            return Err(AilpError::Config(
                "storage_file cannot contain '..'".to_string(),
            ));
        }
        Ok(())
    }

    /// コピー完了表示の持続時間
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// ストレージファイルの絶対パス
    pub fn storage_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.storage_file)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

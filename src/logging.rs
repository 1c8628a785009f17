//! ロギング初期化
//!
//! TUI が端末を占有するため、ログは `$AILP_HOME/ailp.log` に書き出す。

use crate::env::{EnvVar, LOG_ENV};
use crate::error::Result;
use std::fs::OpenOptions;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer};

/// ログファイル名
pub const LOG_FILE: &str = "ailp.log";

/// 既定のログフィルタ
pub const DEFAULT_FILTER: &str = "ailp=info";

/// フィルタ文字列を決定する
///
/// 優先順位: `AILP_LOG` > `RUST_LOG` > 設定ファイル > 既定値
pub fn resolve_filter(configured: Option<&str>) -> String {
    EnvVar::get(LOG_ENV)
        .or_else(|| EnvVar::get("RUST_LOG"))
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// ファイル出力の tracing subscriber を登録する
pub fn initialize_logging(data_dir: &Path, configured: Option<&str>) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE))?;

    let filter = EnvFilter::try_new(resolve_filter(configured))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);

    // 既に登録済みの場合（テストなど）は無視する
    let _ = tracing_subscriber::registry().with(file_layer).try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn configured_filter_used_when_env_unset() {
        std::env::remove_var(LOG_ENV);
        std::env::remove_var("RUST_LOG");
        assert_eq!(resolve_filter(Some("ailp=debug")), "ailp=debug");
        assert_eq!(resolve_filter(None), DEFAULT_FILTER);
    }

    #[test]
    #[serial]
    fn env_filter_wins_over_config() {
        std::env::set_var(LOG_ENV, "ailp=trace");
        assert_eq!(resolve_filter(Some("ailp=debug")), "ailp=trace");
        std::env::remove_var(LOG_ENV);
    }

    #[test]
    #[serial]
    fn log_file_is_created() {
        let temp = tempfile::TempDir::new().unwrap();
        initialize_logging(temp.path(), None).unwrap();
        assert!(temp.path().join(LOG_FILE).exists());
    }
}

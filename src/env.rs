use std::path::PathBuf;

/// データディレクトリを上書きする環境変数
pub const HOME_ENV: &str = "AILP_HOME";

/// ログフィルタを指定する環境変数
pub const LOG_ENV: &str = "AILP_LOG";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// データディレクトリ（`$AILP_HOME`、未設定なら `$HOME/.ailp`）
    ///
    /// どちらも未設定ならカレントディレクトリの `.ailp` を使う。
    pub fn data_dir() -> PathBuf {
        if let Some(dir) = Self::get(HOME_ENV) {
            return PathBuf::from(dir);
        }
        Self::get("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ailp")
    }
}

//! エラー型
//!
//! - `AilpError`: 内部処理で伝搬する統一エラー型
//! - `RichError` / `ErrorCode` / `ErrorFormatter`: CLI 表示用の構造化エラー

pub mod code;
pub mod formatter;
pub mod rich;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;
pub use rich::{ErrorContext, RichError};

use thiserror::Error;

/// AILP統一エラー型
#[derive(Debug, Error)]
pub enum AilpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("No clipboard tool available")]
    ClipboardUnavailable,

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Tui(String),
}

pub type Result<T> = std::result::Result<T, AilpError>;

impl AilpError {
    /// 見つからないエントリのエラーを作成
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        AilpError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// 表示用のエラーコード
    pub fn code(&self) -> ErrorCode {
        match self {
            AilpError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => ErrorCode::Io001,
            AilpError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                ErrorCode::Io002
            }
            AilpError::Io(_) => ErrorCode::Io001,
            AilpError::Json(_) => ErrorCode::Cat002,
            AilpError::Toml(_) | AilpError::Config(_) => ErrorCode::Cfg001,
            AilpError::Storage(_) => ErrorCode::Sto001,
            AilpError::ClipboardUnavailable => ErrorCode::Clp001,
            AilpError::Clipboard(_) => ErrorCode::Clp002,
            AilpError::NotFound { .. } => ErrorCode::Cat001,
            AilpError::UnknownRoute(_) => ErrorCode::Val001,
            AilpError::Tui(_) => ErrorCode::Tui001,
        }
    }
}

impl From<AilpError> for RichError {
    fn from(err: AilpError) -> Self {
        let code = err.code();
        let context = match &err {
            AilpError::NotFound { kind, id } => {
                ErrorContext::new().with_entry(format!("{kind} {id}"))
            }
            AilpError::UnknownRoute(path) => ErrorContext::new().with_additional("route", path.clone()),
            _ => ErrorContext::new(),
        };
        RichError::new(code, err.to_string())
            .with_context(context)
            .with_source(err)
    }
}

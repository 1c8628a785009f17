//! システムクリップボード
//!
//! 外部ツール（pbcopy / wl-copy / xclip / xsel / clip.exe）へ標準入力で渡す。
//! 最初に起動できたツールを使う。

use crate::error::{AilpError, Result};
use std::future::Future;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// クリップボードへの書き込みを抽象化するトレイト
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<()>> + Send;
}

/// クリップボードツールの起動方法
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// 既定のツール候補（優先順）
pub fn default_commands() -> Vec<ClipboardCommand> {
    vec![
        ClipboardCommand::new("pbcopy", &[]),
        ClipboardCommand::new("wl-copy", &[]),
        ClipboardCommand::new("xclip", &["-selection", "clipboard"]),
        ClipboardCommand::new("xsel", &["--clipboard", "--input"]),
        ClipboardCommand::new("clip.exe", &[]),
    ]
}

/// 外部ツール経由のクリップボード
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    commands: Vec<ClipboardCommand>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::with_commands(default_commands())
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commands(commands: Vec<ClipboardCommand>) -> Self {
        Self { commands }
    }

    async fn pipe_to(command: &ClipboardCommand, text: &str) -> std::io::Result<()> {
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(std::io::Error::other(format!(
                "{} exited with {}",
                command.program, status
            )))
        }
    }
}

impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let mut last_error = None;

        for command in &self.commands {
            match Self::pipe_to(command, text).await {
                Ok(()) => {
                    tracing::debug!(tool = %command.program, bytes = text.len(), "copied to clipboard");
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => {
                    tracing::debug!(tool = %command.program, error = %e, "clipboard tool failed");
                    last_error = Some(format!("{}: {}", command.program, e));
                }
            }
        }

        match last_error {
            Some(message) => Err(AilpError::Clipboard(message)),
            None => Err(AilpError::ClipboardUnavailable),
        }
    }
}

/// テンプレートをコピーし、成否だけを返す
///
/// 失敗はログに残すのみ。
pub async fn copy_template<C: Clipboard>(clipboard: &C, id: &str, template: &str) -> bool {
    match clipboard.write_text(template).await {
        Ok(()) => {
            tracing::info!(prompt = id, "copied prompt template");
            true
        }
        Err(e) => {
            tracing::warn!(prompt = id, error = %e, "failed to copy prompt template");
            false
        }
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
mod tests {
    use super::mock::{FailingClipboard, RecordingClipboard};
    use super::*;

    #[tokio::test]
    async fn copy_template_records_text() {
        let clipboard = RecordingClipboard::default();
        assert!(copy_template(&clipboard, "coding-1", "hello {code}").await);
        assert_eq!(clipboard.contents(), vec!["hello {code}".to_string()]);
    }

    #[tokio::test]
    async fn copy_template_failure_is_swallowed() {
        assert!(!copy_template(&FailingClipboard, "coding-1", "text").await);
    }

    #[tokio::test]
    async fn missing_tools_report_clipboard_error() {
        let clipboard = SystemClipboard::with_commands(vec![ClipboardCommand::new(
            "ailp-missing-clipboard-tool",
            &[],
        )]);
        let err = clipboard.write_text("x").await.unwrap_err();
        assert!(matches!(err, AilpError::ClipboardUnavailable));
        assert_eq!(err.code(), crate::error::ErrorCode::Clp001);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn falls_through_to_first_available_tool() {
        let clipboard = SystemClipboard::with_commands(vec![
            ClipboardCommand::new("ailp-missing-clipboard-tool", &[]),
            ClipboardCommand::new("cat", &[]),
        ]);
        clipboard.write_text("template").await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_tool_reports_exit_status() {
        let clipboard = SystemClipboard::with_commands(vec![ClipboardCommand::new("false", &[])]);
        let err = clipboard.write_text("x").await.unwrap_err();
        assert!(matches!(err, AilpError::Clipboard(msg) if msg.starts_with("false")));
    }

    #[test]
    fn default_commands_prefer_pbcopy() {
        let commands = default_commands();
        assert_eq!(commands[0].program, "pbcopy");
        assert!(commands.iter().any(|c| c.program == "xclip"
            && c.args == vec!["-selection".to_string(), "clipboard".to_string()]));
    }
}

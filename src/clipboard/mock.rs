//! テスト用クリップボード

use super::*;
use std::sync::Mutex;

/// 書き込まれた内容を記録する
#[derive(Default)]
pub struct RecordingClipboard {
    contents: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn contents(&self) -> Vec<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        self.contents.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// 常に失敗する
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    async fn write_text(&self, _text: &str) -> Result<()> {
        Err(AilpError::Clipboard("permission denied".to_string()))
    }
}

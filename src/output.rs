//! CLI 出力ヘルパー

use crate::error::{AilpError, RichError};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;
use serde::Serialize;

/// 絞り込み結果が空のときの表示
pub const EMPTY_STATE: &str = "没有匹配的内容";

/// 動画が見つからないときの表示
pub const EMPTY_VIDEOS: &str = "未找到相关视频";

/// 共通スタイルのテーブルを作成
pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// JSON で出力
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), RichError> {
    let json = serde_json::to_string_pretty(value).map_err(AilpError::from)?;
    println!("{json}");
    Ok(())
}

/// 空状態メッセージ
pub fn print_empty(message: &str) {
    println!("{} {}", "•".yellow(), message);
}

/// 成功メッセージ
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// 見出し
pub fn print_heading(title: &str, subtitle: &str) {
    println!("{} {}", title.bold(), subtitle.dimmed());
}

/// 文字数で切り詰める（末尾に `…`）
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

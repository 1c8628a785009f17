//! 色キー

use ratatui::style::Color;

/// 既知の色キー
///
/// 未知のキーは `Default`（青として描画）に落とす。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorKey {
    Blue,
    Cyan,
    Green,
    Purple,
    Orange,
    Pink,
    Indigo,
    Red,
    #[default]
    Default,
}

impl ColorKey {
    pub fn from_key(key: &str) -> Self {
        match key {
            "blue" => ColorKey::Blue,
            "cyan" => ColorKey::Cyan,
            "green" => ColorKey::Green,
            "purple" => ColorKey::Purple,
            "orange" => ColorKey::Orange,
            "pink" => ColorKey::Pink,
            "indigo" => ColorKey::Indigo,
            "red" => ColorKey::Red,
            _ => ColorKey::Default,
        }
    }

    /// モデル・ワークフローの数値IDから色を決める
    pub fn for_id(id: u32) -> Self {
        match id {
            1 => ColorKey::Blue,
            2 => ColorKey::Cyan,
            3 => ColorKey::Green,
            4 => ColorKey::Purple,
            5 => ColorKey::Orange,
            _ => ColorKey::Default,
        }
    }

    /// プロンプトID（`coding-2` など）から色を決める
    pub fn for_prompt_id(id: &str) -> Self {
        match id {
            "writing-1" | "coding-1" | "design-4" => ColorKey::Blue,
            "writing-2" | "design-5" => ColorKey::Cyan,
            "writing-3" => ColorKey::Green,
            "writing-4" | "coding-3" | "design-2" => ColorKey::Purple,
            "writing-5" | "design-1" => ColorKey::Pink,
            "coding-2" | "design-3" => ColorKey::Indigo,
            "coding-4" => ColorKey::Orange,
            "coding-5" => ColorKey::Red,
            _ => ColorKey::Default,
        }
    }

    pub fn to_color(&self) -> Color {
        match self {
            ColorKey::Blue | ColorKey::Default => Color::Blue,
            ColorKey::Cyan => Color::Cyan,
            ColorKey::Green => Color::Green,
            ColorKey::Purple => Color::Magenta,
            ColorKey::Orange => Color::Rgb(249, 115, 22),
            ColorKey::Pink => Color::LightMagenta,
            ColorKey::Indigo => Color::Rgb(99, 102, 241),
            ColorKey::Red => Color::Red,
        }
    }
}

/// 難易度バッジの色
pub fn level_color(level: &str) -> Color {
    match level {
        "初级" => Color::Green,
        "中级" => Color::Blue,
        "高级" => Color::Magenta,
        _ => Color::Gray,
    }
}

/// 動画分類バッジの色
pub fn video_category_color(category: &str) -> Color {
    match category {
        "基础" => Color::Gray,
        "进阶" => Color::Magenta,
        "实战" => Color::Blue,
        "高级" => Color::Rgb(249, 115, 22),
        _ => Color::DarkGray,
    }
}

//! 关于我 タブ
//!
//! 静的テキストのみ。

use crate::tui::core::DataStore;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const ABOUT_TEXT: &str = "AI大模型技术学习平台\n\n\
深入了解AI大模型技术，学习工作流构建和智能体开发。\n\
这里整理了主流大模型、常用工作流、智能体案例、提示词模板与系统化的视频教程，\n\
帮助你在AI时代保持竞争力。";

/// 画面を描画
pub fn view(f: &mut Frame, area: Rect, data: &DataStore) {
    let catalog = &data.catalog;
    let stats = format!(
        "\n\n收录 {} 个大模型 · {} 个工作流 · {} 个智能体 · {} 个提示词 · {} 个视频",
        catalog.models.len(),
        catalog.workflows.len(),
        catalog.agents.len(),
        catalog.prompt_count(),
        catalog.videos.len(),
    );
    let paragraph = Paragraph::new(format!("{ABOUT_TEXT}{stats}"))
        .block(Block::default().title(" 关于我 ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

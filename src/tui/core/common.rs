//! 共通 UI ユーティリティ
//!
//! 複数タブで共有される描画・選択ユーティリティ。

use crate::filter::Selector;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, ListState, Paragraph};

/// 選択肢を次へ進める（末尾の次は先頭）
pub fn cycle_selector(options: &[&str], current: &Selector) -> Selector {
    let position = options
        .iter()
        .position(|o| Selector::parse(o) == *current)
        .unwrap_or(0);
    let next = options
        .get((position + 1) % options.len().max(1))
        .copied()
        .unwrap_or("all");
    Selector::parse(next)
}

/// リスト選択を上下に移動（範囲内に収める）
pub fn move_selection(state: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let current = state.selected().unwrap_or(0) as isize;
    let next = (current + delta).clamp(0, len as isize - 1) as usize;
    state.select(Some(next));
}

/// 件数変化後に選択を範囲内へ戻す
pub fn clamp_selection(state: &mut ListState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        Some(i) if i >= len => state.select(Some(len - 1)),
        None => state.select(Some(0)),
        _ => {}
    }
}

/// 選択肢のチップ列（選択中を強調）
pub fn selector_line(
    label: &str,
    options: &[&str],
    current: &Selector,
    display: fn(&str) -> &str,
) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{label}: "),
        Style::default().fg(Color::DarkGray),
    )];
    for option in options {
        let style = if Selector::parse(option) == *current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", display(option)), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// 空状態の表示
pub fn render_empty(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(format!("\n  {message}"))
        .block(Block::default().title(format!(" {title} ")).borders(Borders::ALL))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}

/// 表示名をそのまま返す
pub fn identity(value: &str) -> &str {
    value
}

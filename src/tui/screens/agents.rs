//! 智能体 タブの Model/Msg/update/view

use crate::display::{ColorKey, IconKind};
use crate::tui::core::{move_selection, DataStore};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

// ============================================================================
// CacheState（タブ切替時の保持状態）
// ============================================================================

/// キャッシュ状態（タブ切替時に保持）
#[derive(Debug, Default)]
pub struct CacheState {
    pub selected: Option<usize>,
}

// ============================================================================
// Model（画面状態）
// ============================================================================

/// 智能体 タブの画面状態
pub struct Model {
    pub state: ListState,
}

impl Model {
    /// キャッシュから復元
    pub fn from_cache(data: &DataStore, cache: &CacheState) -> Self {
        let mut state = ListState::default();
        if !data.catalog.agents.is_empty() {
            state.select(Some(cache.selected.unwrap_or(0)));
        }
        Self { state }
    }

    /// キャッシュ状態を取得
    pub fn to_cache(&self) -> CacheState {
        CacheState {
            selected: self.state.selected(),
        }
    }
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

pub enum Msg {
    Up,
    Down,
}

/// キーコードをメッセージに変換
pub fn key_to_msg(key: KeyCode) -> Option<Msg> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
        _ => None,
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

pub fn update(model: &mut Model, msg: Msg, data: &DataStore) {
    let len = data.catalog.agents.len();
    match msg {
        Msg::Up => move_selection(&mut model.state, len, -1),
        Msg::Down => move_selection(&mut model.state, len, 1),
    }
}

// ============================================================================
// view（描画）
// ============================================================================

pub fn view(f: &mut Frame, area: Rect, model: &Model, data: &DataStore) {
    let agents = &data.catalog.agents;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = agents
        .iter()
        .map(|agent| {
            let color = ColorKey::from_key(&agent.color).to_color();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", IconKind::from_key(&agent.icon).glyph()),
                    Style::default().fg(color),
                ),
                Span::raw(agent.name.clone()),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().title(" 智能体 ").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = model.state.clone();
    f.render_stateful_widget(list, chunks[0], &mut state);

    let Some(agent) = model.state.selected().and_then(|i| agents.get(i)) else {
        return;
    };
    let color = ColorKey::from_key(&agent.color).to_color();
    let mut lines = vec![
        Line::styled(
            agent.name.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::raw(agent.description.clone()),
        Line::raw(""),
        Line::styled("核心能力", Style::default().add_modifier(Modifier::BOLD)),
    ];
    lines.extend(agent.capabilities.iter().map(|c| Line::raw(format!("  ✓ {c}"))));
    lines.push(Line::raw(""));
    lines.push(Line::styled("应用场景", Style::default().add_modifier(Modifier::BOLD)));
    lines.extend(agent.use_cases.iter().map(|u| Line::raw(format!("  • {u}"))));

    let detail = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(detail, chunks[1]);
}

//! 首页 タブの Model/Msg/update/view
//!
//! カタログの概要と学習リソース一覧。

use crate::display::{rating_stars, resource_category_name, ColorKey, IconKind};
use crate::filter::{filter_resources, Selector};
use crate::output::EMPTY_STATE;
use crate::tui::core::{
    clamp_selection, cycle_selector, move_selection, render_empty, selector_line, DataStore,
};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

/// リソース分類の選択肢
pub const RESOURCE_OPTIONS: &[&str] = &["all", "docs", "tutorials", "tools", "community"];

// ============================================================================
// CacheState（タブ切替時の保持状態）
// ============================================================================

/// キャッシュ状態（タブ切替時に保持）
#[derive(Debug, Default)]
pub struct CacheState {
    pub selected: Option<usize>,
    pub category: Selector,
}

// ============================================================================
// Model（画面状態）
// ============================================================================

pub struct Model {
    pub category: Selector,
    pub state: ListState,
}

impl Model {
    /// キャッシュから復元
    pub fn from_cache(data: &DataStore, cache: &CacheState) -> Self {
        let mut model = Self {
            category: cache.category.clone(),
            state: ListState::default(),
        };
        model.state.select(cache.selected);
        let len = model.visible_len(data);
        clamp_selection(&mut model.state, len);
        model
    }

    /// キャッシュ状態を取得
    pub fn to_cache(&self) -> CacheState {
        CacheState {
            selected: self.state.selected(),
            category: self.category.clone(),
        }
    }

    fn visible_len(&self, data: &DataStore) -> usize {
        filter_resources(&data.catalog.resources, &self.category).len()
    }
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

pub enum Msg {
    Up,
    Down,
    CycleCategory,
}

/// キーコードをメッセージに変換
pub fn key_to_msg(key: KeyCode) -> Option<Msg> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
        KeyCode::Char('c') => Some(Msg::CycleCategory),
        _ => None,
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

pub fn update(model: &mut Model, msg: Msg, data: &DataStore) {
    match msg {
        Msg::Up => {
            let len = model.visible_len(data);
            move_selection(&mut model.state, len, -1);
        }
        Msg::Down => {
            let len = model.visible_len(data);
            move_selection(&mut model.state, len, 1);
        }
        Msg::CycleCategory => {
            model.category = cycle_selector(RESOURCE_OPTIONS, &model.category);
            let len = model.visible_len(data);
            clamp_selection(&mut model.state, len);
        }
    }
}

// ============================================================================
// view（描画）
// ============================================================================

pub fn view(f: &mut Frame, area: Rect, model: &Model, data: &DataStore) {
    let catalog = &data.catalog;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // 概要
            Constraint::Length(1), // 分類
            Constraint::Min(1),    // リソース
        ])
        .split(area);

    let overview = Paragraph::new(vec![
        Line::styled(
            "AI大模型技术学习平台",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(format!(
            "{} 大模型 · {} 工作流 · {} 智能体 · {} 提示词 · {} 视频 · 已收藏 {}",
            catalog.models.len(),
            catalog.workflows.len(),
            catalog.agents.len(),
            catalog.prompt_count(),
            catalog.videos.len(),
            data.favorites.len(),
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(overview, chunks[0]);

    f.render_widget(
        Paragraph::new(selector_line(
            "资源",
            RESOURCE_OPTIONS,
            &model.category,
            resource_category_name,
        )),
        chunks[1],
    );

    let resources = filter_resources(&catalog.resources, &model.category);
    if resources.is_empty() {
        render_empty(f, chunks[2], "学习资源", EMPTY_STATE);
        return;
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    let items: Vec<ListItem> = resources
        .iter()
        .map(|r| {
            let color = ColorKey::from_key(&r.color).to_color();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", IconKind::from_key(&r.icon).glyph()),
                    Style::default().fg(color),
                ),
                Span::raw(r.title.clone()),
                Span::styled(
                    format!("  {}", resource_category_name(&r.category)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().title(" 学习资源 ").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = model.state.clone();
    f.render_stateful_widget(list, body[0], &mut state);

    if let Some(resource) = model.state.selected().and_then(|i| resources.get(i)) {
        let detail = Paragraph::new(vec![
            Line::styled(
                resource.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw(resource.description.clone()),
            Line::raw(""),
            Line::styled(rating_stars(resource.rating), Style::default().fg(Color::Yellow)),
        ])
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
        f.render_widget(detail, body[1]);
    }
}

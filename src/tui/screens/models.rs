//! 大模型 タブの Model/Msg/update/view
//!
//! 種別フィルタと、1件だけ展開できる特性リスト。

use crate::catalog::EntryId;
use crate::display::{model_type_name, ColorKey, IconKind};
use crate::filter::{filter_models, Selector};
use crate::output::EMPTY_STATE;
use crate::state::ExpandState;
use crate::tui::core::{
    clamp_selection, cycle_selector, move_selection, render_empty, selector_line, DataStore,
};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

/// 種別の選択肢
pub const TYPE_OPTIONS: &[&str] = &["all", "text", "image", "audio", "multimodal"];

// ============================================================================
// CacheState（タブ切替時の保持状態）
// ============================================================================

/// キャッシュ状態（タブ切替時に保持）
#[derive(Debug, Default)]
pub struct CacheState {
    pub selected: Option<usize>,
    pub kind: Selector,
}

// ============================================================================
// Model（画面状態）
// ============================================================================

/// 大模型 タブの画面状態
pub struct Model {
    pub kind: Selector,
    pub expand: ExpandState<EntryId>,
    pub state: ListState,
}

impl Model {
    /// キャッシュから復元
    pub fn from_cache(data: &DataStore, cache: &CacheState) -> Self {
        let mut model = Self {
            kind: cache.kind.clone(),
            expand: ExpandState::new(),
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
            kind: self.kind.clone(),
        }
    }

    fn visible_len(&self, data: &DataStore) -> usize {
        filter_models(&data.catalog.models, &self.kind).len()
    }

    /// 選択中のモデルID
    pub fn selected_id(&self, data: &DataStore) -> Option<EntryId> {
        let models = filter_models(&data.catalog.models, &self.kind);
        self.state
            .selected()
            .and_then(|i| models.get(i))
            .map(|m| m.id)
    }
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

pub enum Msg {
    Up,
    Down,
    /// 選択中のカードを展開/折りたたみ
    Toggle,
    /// 種別フィルタを次へ
    CycleType,
}

/// キーコードをメッセージに変換
pub fn key_to_msg(key: KeyCode) -> Option<Msg> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::Toggle),
        KeyCode::Char('t') => Some(Msg::CycleType),
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
        Msg::Toggle => {
            if let Some(id) = model.selected_id(data) {
                model.expand.toggle(id);
            }
        }
        Msg::CycleType => {
            model.kind = cycle_selector(TYPE_OPTIONS, &model.kind);
            let len = model.visible_len(data);
            clamp_selection(&mut model.state, len);
        }
    }
}

// ============================================================================
// view（描画）
// ============================================================================

pub fn view(f: &mut Frame, area: Rect, model: &Model, data: &DataStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    f.render_widget(
        Paragraph::new(selector_line("类型", TYPE_OPTIONS, &model.kind, type_label)),
        chunks[0],
    );

    let models = filter_models(&data.catalog.models, &model.kind);
    if models.is_empty() {
        render_empty(f, chunks[1], "大模型", EMPTY_STATE);
        return;
    }

    let items: Vec<ListItem> = models
        .iter()
        .map(|m| {
            let color = ColorKey::for_id(m.id).to_color();
            let expanded = model.expand.is_expanded(&m.id);
            let mut lines = vec![Line::from(vec![
                Span::raw(if expanded { "▾ " } else { "▸ " }),
                Span::styled(
                    format!("{} ", IconKind::from_key(&m.icon).glyph()),
                    Style::default().fg(color),
                ),
                Span::styled(m.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {} · {}", model_type_name(m.kind.as_str()), m.company),
                    Style::default().fg(Color::DarkGray),
                ),
            ])];
            lines.push(Line::raw(format!("    {}", m.description)));
            if expanded {
                lines.push(Line::styled(
                    "    主要特性",
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                lines.extend(
                    m.features
                        .iter()
                        .map(|feature| Line::styled(format!("      ✓ {feature}"), Style::default().fg(color))),
                );
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" 大模型 ({}) ", models.len()))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = model.state.clone();
    f.render_stateful_widget(list, chunks[1], &mut state);
}

fn type_label(code: &str) -> &str {
    match code {
        "all" => "全部",
        other => model_type_name(other),
    }
}

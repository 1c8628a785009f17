//! 工作流 タブの Model/Msg/update/view

use crate::catalog::EntryId;
use crate::display::{ColorKey, IconKind};
use crate::state::ExpandState;
use crate::tui::core::{move_selection, DataStore};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

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

pub struct Model {
    pub expand: ExpandState<EntryId>,
    pub state: ListState,
}

impl Model {
    /// キャッシュから復元
    pub fn from_cache(data: &DataStore, cache: &CacheState) -> Self {
        let mut state = ListState::default();
        if !data.catalog.workflows.is_empty() {
            state.select(Some(cache.selected.unwrap_or(0)));
        }
        Self {
            expand: ExpandState::new(),
            state,
        }
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
    Toggle,
}

/// キーコードをメッセージに変換
pub fn key_to_msg(key: KeyCode) -> Option<Msg> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::Toggle),
        _ => None,
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

pub fn update(model: &mut Model, msg: Msg, data: &DataStore) {
    let workflows = &data.catalog.workflows;
    match msg {
        Msg::Up => move_selection(&mut model.state, workflows.len(), -1),
        Msg::Down => move_selection(&mut model.state, workflows.len(), 1),
        Msg::Toggle => {
            if let Some(workflow) = model.state.selected().and_then(|i| workflows.get(i)) {
                model.expand.toggle(workflow.id);
            }
        }
    }
}

// ============================================================================
// view（描画）
// ============================================================================

pub fn view(f: &mut Frame, area: Rect, model: &Model, data: &DataStore) {
    let items: Vec<ListItem> = data
        .catalog
        .workflows
        .iter()
        .map(|w| {
            let color = ColorKey::for_id(w.id).to_color();
            let expanded = model.expand.is_expanded(&w.id);
            let mut lines = vec![
                Line::from(vec![
                    Span::raw(if expanded { "▾ " } else { "▸ " }),
                    Span::styled(
                        format!("{} ", IconKind::from_key(&w.icon).glyph()),
                        Style::default().fg(color),
                    ),
                    Span::styled(w.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {} 步", w.steps.len()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::raw(format!("    {}", w.description)),
            ];
            if expanded {
                for step in &w.steps {
                    lines.push(Line::from(vec![
                        Span::styled(format!("    {}. ", step.step), Style::default().fg(color)),
                        Span::styled(step.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(format!("  {}", step.description)),
                    ]));
                }
                lines.push(Line::styled(
                    format!("    工具: {}", w.tools.join(" · ")),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" 工作流 ").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = model.state.clone();
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use crate::storage::mock::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn toggle_follows_selection() {
        let data = DataStore::new(
            Catalog::bundled().unwrap(),
            Arc::new(MemoryStore::new()),
            &Config::default(),
        );
        let mut model = Model::from_cache(&data, &CacheState::default());
        update(&mut model, Msg::Down, &data);
        update(&mut model, Msg::Toggle, &data);
        assert!(model.expand.is_expanded(&2));
        update(&mut model, Msg::Up, &data);
        update(&mut model, Msg::Toggle, &data);
        assert_eq!(model.expand.expanded(), Some(&1));
    }
}

//! 提示词 タブの Model/Msg/update/view
//!
//! 分類フィルタ、お気に入り切替、テンプレートのコピー。
//! コピー自体は非同期で行うため、update は `CopyRequest` を返すだけ。

use crate::catalog::{Prompt, PromptId};
use crate::display::{category_name, ColorKey};
use crate::filter::{filter_prompts, Selector};
use crate::output::EMPTY_STATE;
use crate::tui::core::{
    clamp_selection, cycle_selector, move_selection, render_empty, selector_line, CopyRequest,
    DataStore,
};
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
    pub category: Selector,
}

// ============================================================================
// Model（画面状態）
// ============================================================================

/// 提示词 タブの画面状態
pub struct Model {
    pub category: Selector,
    pub favorites_only: bool,
    pub state: ListState,
}

impl Model {
    /// キャッシュから復元
    pub fn from_cache(data: &DataStore, cache: &CacheState) -> Self {
        let mut model = Self {
            category: cache.category.clone(),
            favorites_only: false,
            state: ListState::default(),
        };
        model.state.select(cache.selected);
        let len = model.visible(data).len();
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

    /// 表示中のプロンプト
    pub fn visible<'a>(&self, data: &'a DataStore) -> Vec<&'a Prompt> {
        filter_prompts(&data.catalog.prompt_categories, &self.category)
            .into_iter()
            .filter(|p| !self.favorites_only || data.favorites.contains(&p.id))
            .collect()
    }

    /// 選択中のプロンプト
    pub fn selected<'a>(&self, data: &'a DataStore) -> Option<&'a Prompt> {
        let visible = self.visible(data);
        self.state.selected().and_then(|i| visible.get(i).copied())
    }
}

/// 分類の選択肢（`all` + カタログの分類）
fn category_options(data: &DataStore) -> Vec<&str> {
    std::iter::once("all")
        .chain(data.catalog.prompt_categories.iter().map(|c| c.category.as_str()))
        .collect()
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

pub enum Msg {
    Up,
    Down,
    /// 分類フィルタを次へ
    CycleCategory,
    /// お気に入りのみ表示の切替
    ToggleFavoritesOnly,
    /// 選択中のプロンプトをお気に入りに追加/削除
    ToggleFavorite,
    /// 選択中のテンプレートをコピー
    Copy,
}

/// キーコードをメッセージに変換
pub fn key_to_msg(key: KeyCode) -> Option<Msg> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
        KeyCode::Char('c') => Some(Msg::CycleCategory),
        KeyCode::Char('s') => Some(Msg::ToggleFavoritesOnly),
        KeyCode::Char('f') => Some(Msg::ToggleFavorite),
        KeyCode::Enter | KeyCode::Char('y') => Some(Msg::Copy),
        _ => None,
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新（コピー要求があれば返す）
pub fn update(model: &mut Model, msg: Msg, data: &mut DataStore) -> Option<CopyRequest> {
    match msg {
        Msg::Up => {
            let len = model.visible(data).len();
            move_selection(&mut model.state, len, -1);
        }
        Msg::Down => {
            let len = model.visible(data).len();
            move_selection(&mut model.state, len, 1);
        }
        Msg::CycleCategory => {
            model.category = cycle_selector(&category_options(data), &model.category);
            let len = model.visible(data).len();
            clamp_selection(&mut model.state, len);
        }
        Msg::ToggleFavoritesOnly => {
            model.favorites_only = !model.favorites_only;
            let len = model.visible(data).len();
            clamp_selection(&mut model.state, len);
        }
        Msg::ToggleFavorite => {
            let id: Option<PromptId> = model.selected(data).map(|p| p.id.clone());
            if let Some(id) = id {
                data.favorites.toggle(&id);
                let len = model.visible(data).len();
                clamp_selection(&mut model.state, len);
            }
        }
        Msg::Copy => {
            return model.selected(data).map(|p| CopyRequest {
                id: p.id.clone(),
                template: p.template.clone(),
            });
        }
    }
    None
}

// ============================================================================
// view（描画）
// ============================================================================

pub fn view(f: &mut Frame, area: Rect, model: &Model, data: &DataStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let mut header = selector_line("分类", &category_options(data), &model.category, category_name);
    if model.favorites_only {
        header.push_span(Span::styled(" ★ 仅收藏", Style::default().fg(Color::Yellow)));
    }
    f.render_widget(Paragraph::new(header), chunks[0]);

    let prompts = model.visible(data);
    if prompts.is_empty() {
        render_empty(f, chunks[1], "提示词", EMPTY_STATE);
        return;
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    let copied = data.copied_prompt();
    let items: Vec<ListItem> = prompts
        .iter()
        .map(|p| {
            let star = if data.favorites.contains(&p.id) { "★ " } else { "  " };
            let mut spans = vec![
                Span::styled(star, Style::default().fg(Color::Yellow)),
                Span::raw(p.title.clone()),
            ];
            if let Some(tag) = p.tags.first() {
                spans.push(Span::styled(
                    format!(" [{tag}]"),
                    Style::default().fg(ColorKey::for_prompt_id(&p.id).to_color()),
                ));
            }
            if copied == Some(&p.id) {
                spans.push(Span::styled(" ✓ 已复制", Style::default().fg(Color::Green)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" 提示词 ({}) ", prompts.len()))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = model.state.clone();
    f.render_stateful_widget(list, body[0], &mut state);

    let Some(prompt) = model.selected(data) else {
        return;
    };
    let mut lines = vec![
        Line::styled(prompt.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::styled(prompt.description.clone(), Style::default().fg(Color::DarkGray)),
        Line::raw(""),
    ];
    lines.extend(prompt.template.lines().map(|l| Line::raw(l.to_string())));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        prompt.tags.iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" "),
        Style::default().fg(Color::DarkGray),
    ));
    let mut title = format!(" {} ", prompt.id);
    if data.copy_feedback.is_copied(&prompt.id, data.now) {
        title.push_str("✓ 已复制 ");
    }
    let detail = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(detail, body[1]);
}

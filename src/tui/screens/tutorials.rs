//! 教程 タブの Model/Msg/update/view
//!
//! フォルダ一覧 → フォルダ詳細 のナビゲーション。
//! 詳細では分類・難易度・検索で動画を絞り込む。

use crate::catalog::Video;
use crate::display::{level_color, video_category_color, IconKind};
use crate::output::EMPTY_VIDEOS;
use crate::state::{TutorialNav, TutorialView, VIDEO_CATEGORIES, VIDEO_LEVELS};
use crate::tui::core::{
    clamp_selection, cycle_selector, identity, move_selection, render_empty, selector_line,
    DataStore,
};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

// ============================================================================
// Model（画面状態）
// ============================================================================

/// 教程 タブの画面状態
pub struct Model {
    pub nav: TutorialNav,
    pub folder_state: ListState,
    pub video_state: ListState,
    /// 検索欄にフォーカスしているか
    pub search_focused: bool,
}

impl Model {
    pub fn new(data: &DataStore) -> Self {
        let mut folder_state = ListState::default();
        if !data.catalog.folders.is_empty() {
            folder_state.select(Some(0));
        }
        Self {
            nav: TutorialNav::new(data.latest_videos),
            folder_state,
            video_state: ListState::default(),
            search_focused: false,
        }
    }

    /// トップレベル（タブ切替可能な状態）かどうか
    pub fn is_top_level(&self) -> bool {
        self.nav.view() == TutorialView::FolderList
    }

    /// 文字入力中かどうか
    pub fn is_text_input(&self) -> bool {
        self.search_focused
    }

    fn visible_len(&self, data: &DataStore) -> usize {
        self.nav.visible_videos(&data.catalog).len()
    }
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

pub enum Msg {
    Up,
    Down,
    /// 選択中のフォルダを開く
    Open,
    /// フォルダ一覧へ戻る
    Back,
    CycleCategory,
    CycleLevel,
    FocusSearch,
    SearchInput(char),
    SearchBackspace,
    SearchDone,
}

/// キーコードをメッセージに変換
pub fn key_to_msg(key: KeyCode, model: &Model) -> Option<Msg> {
    if model.search_focused {
        return match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => Some(Msg::SearchDone),
            KeyCode::Backspace => Some(Msg::SearchBackspace),
            KeyCode::Char(c) => Some(Msg::SearchInput(c)),
            _ => None,
        };
    }

    match (model.nav.view(), key) {
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(Msg::Up),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(Msg::Down),
        (TutorialView::FolderList, KeyCode::Enter) => Some(Msg::Open),
        (TutorialView::FolderDetail(_), KeyCode::Esc | KeyCode::Backspace) => Some(Msg::Back),
        (TutorialView::FolderDetail(_), KeyCode::Char('c')) => Some(Msg::CycleCategory),
        (TutorialView::FolderDetail(_), KeyCode::Char('l')) => Some(Msg::CycleLevel),
        (TutorialView::FolderDetail(_), KeyCode::Char('/')) => Some(Msg::FocusSearch),
        _ => None,
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

pub fn update(model: &mut Model, msg: Msg, data: &DataStore) {
    let catalog = &data.catalog;
    match msg {
        Msg::Up => move_cursor(model, data, -1),
        Msg::Down => move_cursor(model, data, 1),
        Msg::Open => {
            let Some(folder) = model
                .folder_state
                .selected()
                .and_then(|i| catalog.folders.get(i))
            else {
                return;
            };
            if let Err(e) = model.nav.open_folder(catalog, folder.id) {
                tracing::warn!(error = %e, "cannot open folder");
                return;
            }
            model.video_state = ListState::default();
            let len = model.visible_len(data);
            clamp_selection(&mut model.video_state, len);
        }
        Msg::Back => {
            model.nav.back();
            model.search_focused = false;
            model.video_state = ListState::default();
        }
        Msg::CycleCategory => {
            let next = cycle_selector(VIDEO_CATEGORIES, model.nav.category());
            model.nav.set_category(next);
            refresh_videos(model, data);
        }
        Msg::CycleLevel => {
            let next = cycle_selector(VIDEO_LEVELS, model.nav.level());
            model.nav.set_level(next);
            refresh_videos(model, data);
        }
        Msg::FocusSearch => model.search_focused = true,
        Msg::SearchInput(c) => {
            model.nav.push_search(c);
            refresh_videos(model, data);
        }
        Msg::SearchBackspace => {
            model.nav.pop_search();
            refresh_videos(model, data);
        }
        Msg::SearchDone => model.search_focused = false,
    }
}

fn move_cursor(model: &mut Model, data: &DataStore, delta: isize) {
    match model.nav.view() {
        TutorialView::FolderList => {
            move_selection(&mut model.folder_state, data.catalog.folders.len(), delta)
        }
        TutorialView::FolderDetail(_) => {
            let len = model.visible_len(data);
            move_selection(&mut model.video_state, len, delta)
        }
    }
}

fn refresh_videos(model: &mut Model, data: &DataStore) {
    let len = model.visible_len(data);
    clamp_selection(&mut model.video_state, len);
}

// ============================================================================
// view（描画）
// ============================================================================

pub fn view(f: &mut Frame, area: Rect, model: &Model, data: &DataStore) {
    match model.nav.view() {
        TutorialView::FolderList => view_folder_list(f, area, model, data),
        TutorialView::FolderDetail(_) => view_folder_detail(f, area, model, data),
    }
}

fn view_folder_list(f: &mut Frame, area: Rect, model: &Model, data: &DataStore) {
    let catalog = &data.catalog;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(catalog.folders.len() as u16 + 2),
            Constraint::Min(1),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::styled(
            model.nav.header_label(catalog),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[0],
    );

    let folders: Vec<ListItem> = catalog
        .folders
        .iter()
        .map(|folder| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", IconKind::from_key(&folder.icon).glyph())),
                Span::styled(folder.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {}个视频 · {}", folder.count, folder.description),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    let list = List::new(folders)
        .block(Block::default().title(" 文件夹 ").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = model.folder_state.clone();
    f.render_stateful_widget(list, chunks[1], &mut state);

    let latest = model.nav.visible_videos(catalog);
    let list = List::new(latest.iter().map(|v| video_item(v)).collect::<Vec<_>>())
        .block(Block::default().title(" 最新视频 ").borders(Borders::ALL));
    f.render_widget(list, chunks[2]);
}

fn view_folder_detail(f: &mut Frame, area: Rect, model: &Model, data: &DataStore) {
    let catalog = &data.catalog;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 見出し
            Constraint::Length(1), // 分類
            Constraint::Length(1), // 難易度
            Constraint::Length(1), // 検索
            Constraint::Min(1),    // 動画
        ])
        .split(area);

    let description = model
        .nav
        .current_folder(catalog)
        .map(|folder| folder.description.as_str())
        .unwrap_or_default();
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                model.nav.header_label(catalog),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {description}"), Style::default().fg(Color::DarkGray)),
        ])),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(selector_line("分类", VIDEO_CATEGORIES, model.nav.category(), identity)),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(selector_line("难度", VIDEO_LEVELS, model.nav.level(), identity)),
        chunks[2],
    );

    let search_style = if model.search_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cursor = if model.search_focused { "▏" } else { "" };
    f.render_widget(
        Paragraph::new(Line::styled(
            format!("搜索: {}{}", model.nav.search(), cursor),
            search_style,
        )),
        chunks[3],
    );

    let videos = model.nav.visible_videos(catalog);
    if videos.is_empty() {
        render_empty(f, chunks[4], "视频", EMPTY_VIDEOS);
        return;
    }

    let list = List::new(videos.iter().map(|v| video_item(v)).collect::<Vec<_>>())
        .block(
            Block::default()
                .title(format!(" 找到 {} 个视频 ", videos.len()))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = model.video_state.clone();
    f.render_stateful_widget(list, chunks[4], &mut state);
}

fn video_item(video: &Video) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::raw(format!("▶ {}", video.title)),
        Span::styled(
            format!("  {}", video.category),
            Style::default().fg(video_category_color(&video.category)),
        ),
        Span::styled(
            format!(" {}", video.level),
            Style::default().fg(level_color(&video.level)),
        ),
        Span::styled(
            format!("  {} · {}次观看", video.duration, video.views),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, EntryId};
    use crate::config::Config;
    use crate::storage::mock::MemoryStore;
    use std::sync::Arc;

    fn data() -> DataStore {
        DataStore::new(
            Catalog::bundled().unwrap(),
            Arc::new(MemoryStore::new()),
            &Config::default(),
        )
    }

    fn visible_ids(model: &Model, data: &DataStore) -> Vec<EntryId> {
        model
            .nav
            .visible_videos(&data.catalog)
            .iter()
            .map(|v| v.id)
            .collect()
    }

    #[test]
    fn folder_list_previews_latest_six() {
        let data = data();
        let model = Model::new(&data);
        assert!(model.is_top_level());
        assert_eq!(visible_ids(&model, &data), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn open_second_folder_and_filter_level() {
        let data = data();
        let mut model = Model::new(&data);
        update(&mut model, Msg::Down, &data);
        update(&mut model, Msg::Open, &data);
        assert_eq!(model.nav.view(), TutorialView::FolderDetail(2));
        assert_eq!(model.video_state.selected(), Some(0));

        // 全部 → 初级 → 中级 → 高级
        for _ in 0..3 {
            update(&mut model, Msg::CycleLevel, &data);
        }
        assert_eq!(visible_ids(&model, &data), vec![7, 8]);
    }

    #[test]
    fn search_keys_are_captured_while_focused() {
        let data = data();
        let mut model = Model::new(&data);
        update(&mut model, Msg::Open, &data);

        let msg = key_to_msg(KeyCode::Char('/'), &model).unwrap();
        update(&mut model, msg, &data);
        assert!(model.is_text_input());

        for c in "GPT".chars() {
            let msg = key_to_msg(KeyCode::Char(c), &model).unwrap();
            update(&mut model, msg, &data);
        }
        assert_eq!(model.nav.search(), "GPT");
        assert_eq!(visible_ids(&model, &data), vec![1, 5]);

        let msg = key_to_msg(KeyCode::Esc, &model).unwrap();
        update(&mut model, msg, &data);
        assert!(!model.is_text_input());
        assert_eq!(model.nav.search(), "GPT");
    }

    #[test]
    fn back_resets_filters_and_returns_to_list() {
        let data = data();
        let mut model = Model::new(&data);
        update(&mut model, Msg::Open, &data);
        update(&mut model, Msg::CycleCategory, &data);
        update(&mut model, Msg::SearchInput('z'), &data);
        assert!(visible_ids(&model, &data).is_empty());

        let msg = key_to_msg(KeyCode::Esc, &model).unwrap();
        update(&mut model, msg, &data);
        assert!(model.is_top_level());
        assert!(model.nav.category().is_all());
        assert_eq!(model.nav.search(), "");
    }

    #[test]
    fn enter_does_nothing_inside_folder() {
        let data = data();
        let mut model = Model::new(&data);
        update(&mut model, Msg::Open, &data);
        assert!(key_to_msg(KeyCode::Enter, &model).is_none());
    }
}

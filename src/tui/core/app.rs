//! ブラウザ TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: アプリケーション全体の状態（データ + 画面 + キャッシュ）
//! - `Screen`: アクティブ画面の状態
//! - `Msg`: アプリケーションへのメッセージ
//! - `ScreenCache`: タブ切替時に保持する軽量な状態

use super::data::DataStore;
use crate::catalog::PromptId;
use crate::route::Page;
use crate::tui::screens::{about, agents, home, models, prompts, tutorials, workflows};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Tabs};
use std::time::Instant;

// ============================================================================
// Screen Cache（タブ切替時の状態保持）
// ============================================================================

/// タブ切替時に保持する軽量な状態
///
/// 教程 タブはページ遷移と同じくキャッシュせず、毎回フォルダ一覧から始まる。
#[derive(Debug, Default)]
pub struct ScreenCache {
    pub home: home::CacheState,
    pub models: models::CacheState,
    pub workflows: workflows::CacheState,
    pub agents: agents::CacheState,
    pub prompts: prompts::CacheState,
}

// ============================================================================
// Screen（アクティブ画面の状態）
// ============================================================================

/// アクティブ画面の状態
pub enum Screen {
    Home(home::Model),
    Tutorials(tutorials::Model),
    Models(models::Model),
    Workflow(workflows::Model),
    Agents(agents::Model),
    Prompts(prompts::Model),
    About,
}

impl Screen {
    /// 現在のページを取得
    pub fn page(&self) -> Page {
        match self {
            Screen::Home(_) => Page::Home,
            Screen::Tutorials(_) => Page::Tutorials,
            Screen::Models(_) => Page::Models,
            Screen::Workflow(_) => Page::Workflow,
            Screen::Agents(_) => Page::Agents,
            Screen::Prompts(_) => Page::Prompts,
            Screen::About => Page::About,
        }
    }

    /// トップレベル（タブ切替可能な状態）かどうか
    pub fn is_top_level(&self) -> bool {
        match self {
            Screen::Tutorials(m) => m.is_top_level(),
            _ => true,
        }
    }

    /// 文字入力中かどうか
    pub fn is_text_input(&self) -> bool {
        matches!(self, Screen::Tutorials(m) if m.is_text_input())
    }
}

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
pub enum Msg {
    /// 退出
    Quit,
    /// 次のタブへ
    NextTab,
    /// 前のタブへ
    PrevTab,
    /// 定期更新（コピー完了表示の期限切れ判定）
    Tick(Instant),
    /// クリップボード書き込みの完了通知
    CopyFinished { id: PromptId, ok: bool, at: Instant },
    Home(home::Msg),
    Tutorials(tutorials::Msg),
    Models(models::Msg),
    Workflows(workflows::Msg),
    Agents(agents::Msg),
    Prompts(prompts::Msg),
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    /// 共有データストア
    pub data: DataStore,
    /// アクティブ画面
    pub screen: Screen,
    /// タブキャッシュ
    pub cache: ScreenCache,
    /// 退出フラグ
    pub should_quit: bool,
}

impl Model {
    /// 指定ページを開いた状態で作成
    pub fn new(data: DataStore, page: Page) -> Self {
        let cache = ScreenCache::default();
        let screen = build_screen(page, &data, &cache);
        Self {
            data,
            screen,
            cache,
            should_quit: false,
        }
    }
}

/// キー入力をメッセージに変換
pub fn key_to_msg(model: &Model, key: KeyCode) -> Option<Msg> {
    // 文字入力中はすべて画面に委譲
    if let Screen::Tutorials(m) = &model.screen {
        if m.is_text_input() {
            return tutorials::key_to_msg(key, m).map(Msg::Tutorials);
        }
    }

    let is_top_level = model.screen.is_top_level();
    match key {
        KeyCode::Char('q') => Some(Msg::Quit),
        KeyCode::Tab | KeyCode::Right if is_top_level => Some(Msg::NextTab),
        KeyCode::BackTab | KeyCode::Left if is_top_level => Some(Msg::PrevTab),
        _ => match &model.screen {
            Screen::Home(_) => home::key_to_msg(key).map(Msg::Home),
            Screen::Tutorials(m) => tutorials::key_to_msg(key, m).map(Msg::Tutorials),
            Screen::Models(_) => models::key_to_msg(key).map(Msg::Models),
            Screen::Workflow(_) => workflows::key_to_msg(key).map(Msg::Workflows),
            Screen::Agents(_) => agents::key_to_msg(key).map(Msg::Agents),
            Screen::Prompts(_) => prompts::key_to_msg(key).map(Msg::Prompts),
            Screen::About => None,
        },
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// クリップボードへの書き込み要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub id: PromptId,
    pub template: String,
}

/// app::update() の戻り値
#[derive(Debug, Default)]
pub struct AppUpdateEffect {
    /// 描画後に実行すべきコピー
    pub copy_request: Option<CopyRequest>,
}

impl AppUpdateEffect {
    fn none() -> Self {
        Self::default()
    }
}

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) -> AppUpdateEffect {
    match msg {
        Msg::Quit => model.should_quit = true,
        Msg::NextTab => {
            let page = model.screen.page().next();
            switch_tab(model, page);
        }
        Msg::PrevTab => {
            let page = model.screen.page().prev();
            switch_tab(model, page);
        }
        Msg::Tick(now) => {
            model.data.now = now;
            model.data.copy_feedback.tick(now);
        }
        Msg::CopyFinished { id, ok, at } => {
            model.data.now = at;
            if ok {
                model.data.copy_feedback.mark(id, at);
            }
        }
        Msg::Home(msg) => {
            if let Screen::Home(m) = &mut model.screen {
                home::update(m, msg, &model.data);
            }
        }
        Msg::Tutorials(msg) => {
            if let Screen::Tutorials(m) = &mut model.screen {
                tutorials::update(m, msg, &model.data);
            }
        }
        Msg::Models(msg) => {
            if let Screen::Models(m) = &mut model.screen {
                models::update(m, msg, &model.data);
            }
        }
        Msg::Workflows(msg) => {
            if let Screen::Workflow(m) = &mut model.screen {
                workflows::update(m, msg, &model.data);
            }
        }
        Msg::Agents(msg) => {
            if let Screen::Agents(m) = &mut model.screen {
                agents::update(m, msg, &model.data);
            }
        }
        Msg::Prompts(msg) => {
            if let Screen::Prompts(m) = &mut model.screen {
                return AppUpdateEffect {
                    copy_request: prompts::update(m, msg, &mut model.data),
                };
            }
        }
    }
    AppUpdateEffect::none()
}

/// タブを切り替え
fn switch_tab(model: &mut Model, page: Page) {
    // 現在の画面状態をキャッシュに保存
    match &model.screen {
        Screen::Home(m) => model.cache.home = m.to_cache(),
        Screen::Models(m) => model.cache.models = m.to_cache(),
        Screen::Workflow(m) => model.cache.workflows = m.to_cache(),
        Screen::Agents(m) => model.cache.agents = m.to_cache(),
        Screen::Prompts(m) => model.cache.prompts = m.to_cache(),
        Screen::Tutorials(_) | Screen::About => {}
    }

    model.screen = build_screen(page, &model.data, &model.cache);
    tracing::debug!(page = %page, "switched page");
}

/// キャッシュから画面を作成
fn build_screen(page: Page, data: &DataStore, cache: &ScreenCache) -> Screen {
    match page {
        Page::Home => Screen::Home(home::Model::from_cache(data, &cache.home)),
        Page::Tutorials => Screen::Tutorials(tutorials::Model::new(data)),
        Page::Models => Screen::Models(models::Model::from_cache(data, &cache.models)),
        Page::Workflow => Screen::Workflow(workflows::Model::from_cache(data, &cache.workflows)),
        Page::Agents => Screen::Agents(agents::Model::from_cache(data, &cache.agents)),
        Page::Prompts => Screen::Prompts(prompts::Model::from_cache(data, &cache.prompts)),
        Page::About => Screen::About,
    }
}

// ============================================================================
// view（描画）
// ============================================================================

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タブ
            Constraint::Min(1),    // コンテンツ
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    let titles: Vec<&str> = Page::all().iter().map(|p| p.title()).collect();
    let tabs = Tabs::new(titles)
        .select(model.screen.page().index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│");
    f.render_widget(tabs, chunks[0]);

    let area = chunks[1];
    let data = &model.data;
    match &model.screen {
        Screen::Home(m) => home::view(f, area, m, data),
        Screen::Tutorials(m) => tutorials::view(f, area, m, data),
        Screen::Models(m) => models::view(f, area, m, data),
        Screen::Workflow(m) => workflows::view(f, area, m, data),
        Screen::Agents(m) => agents::view(f, area, m, data),
        Screen::Prompts(m) => prompts::view(f, area, m, data),
        Screen::About => about::view(f, area, data),
    }

    f.render_widget(
        Paragraph::new(Line::styled(help_text(&model.screen), Style::default().fg(Color::DarkGray))),
        chunks[2],
    );
}

fn help_text(screen: &Screen) -> &'static str {
    match screen {
        Screen::Tutorials(m) if m.is_text_input() => "输入关键词搜索 │ Enter/Esc: 完成",
        Screen::Tutorials(m) if !m.is_top_level() => {
            "↑↓: 移动 │ c: 分类 │ l: 难度 │ /: 搜索 │ Esc: 返回 │ q: 退出"
        }
        Screen::Tutorials(_) => "Tab/←→: 切换 │ ↑↓: 移动 │ Enter: 打开 │ q: 退出",
        Screen::Home(_) => "Tab/←→: 切换 │ ↑↓: 移动 │ c: 分类 │ q: 退出",
        Screen::Models(_) => "Tab/←→: 切换 │ ↑↓: 移动 │ Enter: 展开 │ t: 类型 │ q: 退出",
        Screen::Workflow(_) => "Tab/←→: 切换 │ ↑↓: 移动 │ Enter: 展开 │ q: 退出",
        Screen::Prompts(_) => {
            "Tab/←→: 切换 │ ↑↓: 移动 │ c: 分类 │ f: 收藏 │ s: 仅收藏 │ Enter/y: 复制 │ q: 退出"
        }
        Screen::Agents(_) | Screen::About => "Tab/←→: 切换 │ ↑↓: 移动 │ q: 退出",
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;

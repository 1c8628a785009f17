//! カタログブラウザ TUI
//!
//! ratatui/crossterm を使用した対話的なページ切替 UI。
//!
//! ## モジュール構成
//!
//! - `core`: Model/Msg/update/view と共有データ
//! - `screens`: 各ページの実装
//!
//! イベントループはブロッキングスレッドで回し、
//! クリップボード書き込みだけを tokio ランタイムへ投げる。

mod core;
mod screens;

use crate::clipboard::{copy_template, SystemClipboard};
use crate::commands::AppContext;
use crate::error::{AilpError, Result};
use crate::route::Page;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedSender};

use self::core::{key_to_msg, update, view, CopyRequest, DataStore, Model, Msg};

/// 入力待ちの最大時間（コピー完了表示の期限判定間隔）
const TICK_RATE: Duration = Duration::from_millis(200);

/// TUI を実行
pub async fn run(ctx: AppContext, page: Page) -> Result<()> {
    let store = ctx.store();
    let data = DataStore::new(ctx.catalog, store, &ctx.config);
    let handle = Handle::current();

    tokio::task::spawn_blocking(move || run_terminal(data, page, handle))
        .await
        .map_err(tui_error)?
}

fn tui_error(e: impl std::fmt::Display) -> AilpError {
    AilpError::Tui(e.to_string())
}

/// ターミナルを設定してループを回し、終了時に必ず復元する
fn run_terminal(data: DataStore, page: Page, handle: Handle) -> Result<()> {
    terminal::enable_raw_mode().map_err(tui_error)?;
    if let Err(e) = stdout().execute(EnterAlternateScreen) {
        let _ = terminal::disable_raw_mode();
        return Err(tui_error(e));
    }

    let result = event_loop(data, page, &handle);

    // ターミナルを復元
    let _ = terminal::disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);

    result
}

fn event_loop(data: DataStore, page: Page, handle: &Handle) -> Result<()> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).map_err(tui_error)?;

    let mut model = Model::new(data, page);
    let clipboard = Arc::new(SystemClipboard::default());
    let (tx, mut rx) = mpsc::unbounded_channel::<Msg>();

    // メインループ
    while !model.should_quit {
        while let Ok(msg) = rx.try_recv() {
            update(&mut model, msg);
        }
        update(&mut model, Msg::Tick(Instant::now()));

        terminal.draw(|f| view(f, &model)).map_err(tui_error)?;

        if !event::poll(TICK_RATE).map_err(tui_error)? {
            continue;
        }
        let Event::Key(key) = event::read().map_err(tui_error)? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if let Some(msg) = key_to_msg(&model, key.code) {
            let effect = update(&mut model, msg);
            if let Some(request) = effect.copy_request {
                spawn_copy(handle, clipboard.clone(), tx.clone(), request);
            }
        }
    }

    Ok(())
}

/// クリップボード書き込みを非同期に実行し、結果をループへ返す
fn spawn_copy(
    handle: &Handle,
    clipboard: Arc<SystemClipboard>,
    tx: UnboundedSender<Msg>,
    request: CopyRequest,
) {
    handle.spawn(async move {
        let ok = copy_template(clipboard.as_ref(), &request.id, &request.template).await;
        let _ = tx.send(Msg::CopyFinished {
            id: request.id,
            ok,
            at: Instant::now(),
        });
    });
}

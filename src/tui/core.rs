//! コアモジュール
//!
//! TUI の基盤となる構造を提供する。
//!
//! - `app`: Model/Screen/Msg/update/view
//! - `data`: DataStore（共有データ）
//! - `common`: 共通 UI ユーティリティ

mod app;
mod common;
mod data;

pub use app::{key_to_msg, update, view, CopyRequest, Model, Msg};
pub use common::{
    clamp_selection, cycle_selector, identity, move_selection, render_empty, selector_line,
};
pub use data::DataStore;

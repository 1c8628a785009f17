//! 画面モジュール
//!
//! 各タブ（ページ）の実装を提供する。

pub mod about;
pub mod agents;
pub mod home;
pub mod models;
pub mod prompts;
pub mod tutorials;
pub mod workflows;

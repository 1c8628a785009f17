//! 共有データストア
//!
//! 全タブで共有されるデータを一元管理する。
//! カタログは読み取り専用、変化するのはお気に入りとコピー完了フラグのみ。

use crate::catalog::{Catalog, PromptId};
use crate::config::Config;
use crate::state::{CopyFeedback, FavoritesController};
use crate::storage::KeyValueStore;
use std::sync::Arc;
use std::time::Instant;

/// 共有データストア
pub struct DataStore {
    /// 埋め込みカタログ
    pub catalog: Catalog,
    /// お気に入りプロンプト
    pub favorites: FavoritesController,
    /// コピー完了フラグ
    pub copy_feedback: CopyFeedback<PromptId>,
    /// フォルダ一覧で表示する最新動画の件数
    pub latest_videos: usize,
    /// 最後に観測した時刻（Tick で更新）
    pub now: Instant,
}

impl DataStore {
    pub fn new(catalog: Catalog, store: Arc<dyn KeyValueStore>, config: &Config) -> Self {
        Self {
            catalog,
            favorites: FavoritesController::load(store),
            copy_feedback: CopyFeedback::new(config.copy_feedback()),
            latest_videos: config.latest_videos,
            now: Instant::now(),
        }
    }

    /// 現在コピー済み表示中のプロンプト
    pub fn copied_prompt(&self) -> Option<&PromptId> {
        self.copy_feedback.copied_id(self.now)
    }
}

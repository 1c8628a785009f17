//! お気に入りプロンプト
//!
//! 初期状態はストアから読み込み、変更のたびに集合全体を JSON 配列として書き戻す。
//! ストアの失敗はログに残して握りつぶし、メモリ上の状態はそのまま使い続ける。

use crate::catalog::PromptId;
use crate::storage::KeyValueStore;
use std::collections::BTreeSet;
use std::sync::Arc;

/// ストア上のキー
pub const FAVORITES_KEY: &str = "prompt-favorites";

pub struct FavoritesController {
    store: Arc<dyn KeyValueStore>,
    ids: BTreeSet<PromptId>,
}

impl FavoritesController {
    /// ストアから初期状態を読み込む（不正値・未設定は空集合）
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => parse_ids(&raw),
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read favorites");
                BTreeSet::new()
            }
        };
        tracing::debug!(count = ids.len(), "loaded favorites");
        Self { store, ids }
    }

    /// 未登録なら追加、登録済みなら削除。戻り値は変更後にお気に入りかどうか
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        self.persist();
        now_favorite
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.ids) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize favorites");
                return;
            }
        };
        if let Err(e) = self.store.set(FAVORITES_KEY, &json) {
            tracing::warn!(error = %e, "failed to persist favorites");
        }
    }
}

fn parse_ids(raw: &str) -> BTreeSet<PromptId> {
    match serde_json::from_str::<Vec<PromptId>>(raw) {
        Ok(ids) => ids.into_iter().collect(),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed favorites value");
            BTreeSet::new()
        }
    }
}

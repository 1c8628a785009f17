//! フィルタ述語
//!
//! コレクションを1つの選択次元で絞り込む純粋関数群。
//! 合成は逐次的な絞り込み（各条件の AND）で行い、結果は常に元の並び順を保つ。

use crate::catalog::{EntryId, Model, Prompt, PromptCategory, Resource, Video};
use std::convert::Infallible;
use std::str::FromStr;

/// 1つの次元に対する選択値
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selector {
    /// 絞り込みなし
    #[default]
    All,
    /// 値が完全一致するものだけ
    Only(String),
}

impl Selector {
    /// `all` / `全部` は `All`、それ以外は `Only`
    pub fn parse(value: &str) -> Self {
        match value {
            "all" | "全部" => Selector::All,
            other => Selector::Only(other.to_string()),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    /// 表示用（`All` は `全部`）
    pub fn label(&self) -> &str {
        match self {
            Selector::All => "全部",
            Selector::Only(value) => value,
        }
    }
}

impl FromStr for Selector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Selector::parse(s))
    }
}

/// 自由文字列検索の共通ルール
///
/// - 空クエリは全件一致
/// - クエリと title / description を小文字化して部分一致
pub fn matches_text(query: &str, title: &str, description: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    title.to_lowercase().contains(&query) || description.to_lowercase().contains(&query)
}

/// モデル種別で絞り込む
pub fn filter_models<'a>(models: &'a [Model], selector: &Selector) -> Vec<&'a Model> {
    models
        .iter()
        .filter(|m| selector.matches(m.kind.as_str()))
        .collect()
}

/// 分類でプロンプトを絞り込む
///
/// `All` は全分類を順に平坦化する。それ以外は最初に一致した分類のプロンプト。
pub fn filter_prompts<'a>(
    categories: &'a [PromptCategory],
    selector: &Selector,
) -> Vec<&'a Prompt> {
    match selector {
        Selector::All => categories.iter().flat_map(|c| c.prompts.iter()).collect(),
        Selector::Only(code) => categories
            .iter()
            .find(|c| &c.category == code)
            .map(|c| c.prompts.iter().collect())
            .unwrap_or_default(),
    }
}

/// 分類でリソースを絞り込む
pub fn filter_resources<'a>(resources: &'a [Resource], selector: &Selector) -> Vec<&'a Resource> {
    resources
        .iter()
        .filter(|r| selector.matches(&r.category))
        .collect()
}

/// 動画の絞り込み条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoQuery {
    pub folder: Option<EntryId>,
    pub category: Selector,
    pub level: Selector,
    pub search: String,
}

impl VideoQuery {
    /// フォルダ内の全動画
    pub fn in_folder(folder: EntryId) -> Self {
        Self {
            folder: Some(folder),
            ..Self::default()
        }
    }
}

/// フォルダ → 分類 → 難易度 → 自由文字列 の順で動画を絞り込む
pub fn filter_videos<'a>(videos: &'a [Video], query: &VideoQuery) -> Vec<&'a Video> {
    videos
        .iter()
        .filter(|v| query.folder.is_none_or(|id| v.folder_id == id))
        .filter(|v| query.category.matches(&v.category))
        .filter(|v| query.level.matches(&v.level))
        .filter(|v| matches_text(&query.search, &v.title, &v.description))
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

#[cfg(test)]
#[path = "filter_proptests.rs"]
mod proptests;

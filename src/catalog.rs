//! 静的コンテンツストア
//!
//! バイナリに埋め込んだ JSON コレクションを起動時に一度だけパースし、
//! 読み取り専用のカタログとして保持する。参照系はすべて `Option` を返す。

mod bundled;
mod types;

pub use types::{
    Agent, EntryId, Folder, Model, ModelKind, Prompt, PromptCategory, PromptId, Resource, Video,
    Workflow,
};

use crate::error::{AilpError, Result};

/// カタログ全体
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub models: Vec<Model>,
    pub workflows: Vec<Workflow>,
    pub agents: Vec<Agent>,
    pub prompt_categories: Vec<PromptCategory>,
    pub folders: Vec<Folder>,
    pub videos: Vec<Video>,
    pub resources: Vec<Resource>,
}

impl Catalog {
    /// 埋め込みデータからカタログを構築
    pub fn bundled() -> Result<Self> {
        let catalog = bundled::load()?;
        tracing::debug!(
            models = catalog.models.len(),
            workflows = catalog.workflows.len(),
            agents = catalog.agents.len(),
            prompts = catalog.prompt_count(),
            videos = catalog.videos.len(),
            "loaded bundled catalog"
        );
        Ok(catalog)
    }

    pub fn find_workflow(&self, id: EntryId) -> Option<&Workflow> {
        self.workflows.iter().find(|w| w.id == id)
    }

    /// 全分類からプロンプトを検索
    pub fn find_prompt(&self, id: &str) -> Option<&Prompt> {
        self.all_prompts().find(|p| p.id == id)
    }

    pub fn find_folder(&self, id: EntryId) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    /// フォルダを検索し、見つからなければ NotFound エラー
    pub fn require_folder(&self, id: EntryId) -> Result<&Folder> {
        self.find_folder(id)
            .ok_or_else(|| AilpError::not_found("folder", id))
    }

    /// プロンプトを検索し、見つからなければ NotFound エラー
    pub fn require_prompt(&self, id: &str) -> Result<&Prompt> {
        self.find_prompt(id)
            .ok_or_else(|| AilpError::not_found("prompt", id))
    }

    /// 全プロンプト（分類順、分類内は定義順）
    pub fn all_prompts(&self) -> impl Iterator<Item = &Prompt> {
        self.prompt_categories.iter().flat_map(|c| c.prompts.iter())
    }

    /// プロンプトが属する分類コード
    pub fn prompt_category_of(&self, id: &str) -> Option<&str> {
        self.prompt_categories
            .iter()
            .find(|c| c.prompts.iter().any(|p| p.id == id))
            .map(|c| c.category.as_str())
    }

    pub fn prompt_count(&self) -> usize {
        self.prompt_categories.iter().map(|c| c.prompts.len()).sum()
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

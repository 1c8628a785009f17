//! カタログのエンティティ定義
//!
//! JSON のフィールド名はキャメルケース（`folderId`, `useCases`）。

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 数値IDを持つエンティティのID
pub type EntryId = u32;

/// プロンプトID（`writing-1` など）
pub type PromptId = String;

/// 大規模モデルの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Text,
    Image,
    Audio,
    Multimodal,
}

impl ModelKind {
    /// 識別子文字列を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Text => "text",
            ModelKind::Image => "image",
            ModelKind::Audio => "audio",
            ModelKind::Multimodal => "multimodal",
        }
    }

    /// 全種別（フィルタの選択肢順）
    pub fn all() -> &'static [ModelKind] {
        &[
            ModelKind::Text,
            ModelKind::Image,
            ModelKind::Audio,
            ModelKind::Multimodal,
        ]
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 大規模モデル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: EntryId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ModelKind,
    pub company: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
}

/// ワークフローの手順
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

/// ワークフロー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub steps: Vec<WorkflowStep>,
    pub tools: Vec<String>,
}

/// エージェント
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: EntryId,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub capabilities: Vec<String>,
    pub use_cases: Vec<String>,
    pub color: String,
}

/// プロンプトテンプレート
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: PromptId,
    pub title: String,
    pub description: String,
    pub template: String,
    pub tags: Vec<String>,
}

/// プロンプトの分類
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptCategory {
    pub category: String,
    pub icon: String,
    pub prompts: Vec<Prompt>,
}

/// チュートリアル動画のフォルダ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    /// 動画数（表示用の申告値）
    pub count: u32,
    pub icon: String,
}

/// チュートリアル動画
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: EntryId,
    /// 所属フォルダ（参照のみ、存在は保証されない）
    pub folder_id: EntryId,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub thumbnail: String,
    pub category: String,
    pub level: String,
    pub views: String,
}

/// tutorials.json のルート構造
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialData {
    pub folders: Vec<Folder>,
    pub videos: Vec<Video>,
}

/// 学習リソース
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: EntryId,
    pub category: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub rating: u8,
}

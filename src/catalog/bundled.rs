//! 埋め込みデータの読み込み

use super::types::{Agent, Model, PromptCategory, Resource, TutorialData, Workflow};
use super::Catalog;
use crate::error::Result;

const MODELS_JSON: &str = include_str!("../../data/models.json");
const WORKFLOWS_JSON: &str = include_str!("../../data/workflows.json");
const AGENTS_JSON: &str = include_str!("../../data/agents.json");
const PROMPTS_JSON: &str = include_str!("../../data/prompts.json");
const TUTORIALS_JSON: &str = include_str!("../../data/tutorials.json");
const RESOURCES_JSON: &str = include_str!("../../data/resources.json");

/// 全コレクションをパースしてカタログを組み立てる
pub(super) fn load() -> Result<Catalog> {
    let models: Vec<Model> = serde_json::from_str(MODELS_JSON)?;
    let workflows: Vec<Workflow> = serde_json::from_str(WORKFLOWS_JSON)?;
    let agents: Vec<Agent> = serde_json::from_str(AGENTS_JSON)?;
    let prompt_categories: Vec<PromptCategory> = serde_json::from_str(PROMPTS_JSON)?;
    let tutorials: TutorialData = serde_json::from_str(TUTORIALS_JSON)?;
    let resources: Vec<Resource> = serde_json::from_str(RESOURCES_JSON)?;

    Ok(Catalog {
        models,
        workflows,
        agents,
        prompt_categories,
        folders: tutorials.folders,
        videos: tutorials.videos,
        resources,
    })
}

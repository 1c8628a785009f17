use crate::catalog::Catalog;
use crate::cli::Command;
use crate::config::Config;
use crate::error::RichError;
use crate::storage::{FileStore, KeyValueStore};
use std::path::PathBuf;
use std::sync::Arc;

pub mod agents;
pub mod browse;
pub mod models;
pub mod prompts;
pub mod resources;
pub mod routes;
pub mod tutorials;
pub mod workflows;

/// コマンド実行に必要な共有状態
pub struct AppContext {
    pub catalog: Catalog,
    pub config: Config,
    pub data_dir: PathBuf,
}

impl AppContext {
    /// ローカルストレージ
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::new(FileStore::new(self.config.storage_path(&self.data_dir)))
    }
}

pub async fn dispatch(command: Command, ctx: AppContext) -> Result<(), RichError> {
    match command {
        Command::Models(args) => models::run(args, &ctx),
        Command::Workflows(args) => workflows::run(args, &ctx),
        Command::Agents(args) => agents::run(args, &ctx),
        Command::Prompts(args) => prompts::run(args, &ctx).await,
        Command::Tutorials(args) => tutorials::run(args, &ctx),
        Command::Resources(args) => resources::run(args, &ctx),
        Command::Routes => routes::run(),
        Command::Browse(args) => browse::run(args, ctx).await,
    }
}

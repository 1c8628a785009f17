use clap::{Parser, Subcommand};

use crate::commands::{agents, browse, models, prompts, resources, tutorials, workflows};

#[derive(Debug, Parser)]
#[command(name = "ailp")]
#[command(about = "AI learning platform catalog browser", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show cause, remediation and source chain on errors
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 大模型一览
    Models(models::Args),

    /// 工作流一览
    Workflows(workflows::Args),

    /// 智能体一览
    Agents(agents::Args),

    /// 提示词模板（列表、详情、收藏、复制）
    Prompts(prompts::Args),

    /// 教程文件夹与视频
    Tutorials(tutorials::Args),

    /// 学习资源
    Resources(resources::Args),

    /// 页面路由一览
    Routes,

    /// 交互式浏览（TUI）
    Browse(browse::Args),
}

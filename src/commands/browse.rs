//! ailp browse コマンド
//!
//! 対話的な TUI を起動する。

use super::AppContext;
use crate::error::RichError;
use crate::route::Page;
use crate::tui;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Page route to open first (e.g. /prompts)
    #[arg(long, default_value = "/", value_parser = parse_page)]
    pub page: Page,
}

fn parse_page(value: &str) -> Result<Page, String> {
    value.parse::<Page>().map_err(|e| e.to_string())
}

pub async fn run(args: Args, ctx: AppContext) -> Result<(), RichError> {
    tracing::info!(page = %args.page, "starting browser");
    tui::run(ctx, args.page).await?;
    Ok(())
}

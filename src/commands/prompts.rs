//! ailp prompts コマンド
//!
//! プロンプトテンプレートの一覧・詳細・お気に入り切替・コピー。

use super::AppContext;
use crate::catalog::{Catalog, Prompt};
use crate::clipboard::{copy_template, Clipboard, SystemClipboard};
use crate::display::category_name;
use crate::error::RichError;
use crate::filter::{filter_prompts, Selector};
use crate::output::{self, new_table, EMPTY_STATE};
use crate::state::FavoritesController;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List prompt templates
    #[command(
        long_about = "List prompt templates, optionally narrowed to one category (writing, coding, design) or to favorites."
    )]
    List {
        /// Category code, or "all"
        #[arg(long, default_value = "all")]
        category: String,

        /// Only show favorites
        #[arg(long)]
        favorites: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show one prompt template
    Show {
        /// Prompt ID (e.g. coding-2)
        id: String,
    },

    /// Toggle a prompt as favorite
    #[command(long_about = "Add the prompt to favorites, or remove it if it is already a favorite.")]
    Favorite {
        /// Prompt ID
        id: String,
    },

    /// Copy a prompt template to the system clipboard
    Copy {
        /// Prompt ID
        id: String,
    },
}

/// 一覧出力用の行
#[derive(Debug, Serialize)]
struct PromptRow<'a> {
    #[serde(flatten)]
    prompt: &'a Prompt,
    category: &'a str,
    favorite: bool,
}

pub async fn run(args: Args, ctx: &AppContext) -> Result<(), RichError> {
    match args.command {
        Command::List {
            category,
            favorites,
            json,
        } => list(ctx, &Selector::parse(&category), favorites, json),
        Command::Show { id } => show(ctx, &id),
        Command::Favorite { id } => favorite(ctx, &id),
        Command::Copy { id } => copy(ctx, &SystemClipboard::new(), &id).await,
    }
}

fn list(
    ctx: &AppContext,
    selector: &Selector,
    only_favorites: bool,
    json: bool,
) -> Result<(), RichError> {
    let favorites = FavoritesController::load(ctx.store());
    let rows = collect_rows(&ctx.catalog, selector, &favorites, only_favorites);

    if json {
        return output::print_json(&rows);
    }
    if rows.is_empty() {
        output::print_empty(EMPTY_STATE);
        return Ok(());
    }

    let mut table = new_table(vec!["", "ID", "Title", "Category", "Tags"]);
    for row in &rows {
        table.add_row(vec![
            (if row.favorite { "★" } else { "" }).to_string(),
            row.prompt.id.clone(),
            row.prompt.title.clone(),
            category_name(row.category).to_string(),
            row.prompt.tags.join(", "),
        ]);
    }
    println!("{table}");
    println!("{} prompt(s), {} favorite(s)", rows.len(), favorites.len());
    Ok(())
}

fn collect_rows<'a>(
    catalog: &'a Catalog,
    selector: &Selector,
    favorites: &FavoritesController,
    only_favorites: bool,
) -> Vec<PromptRow<'a>> {
    filter_prompts(&catalog.prompt_categories, selector)
        .into_iter()
        .map(|prompt| PromptRow {
            prompt,
            category: catalog.prompt_category_of(&prompt.id).unwrap_or_default(),
            favorite: favorites.contains(&prompt.id),
        })
        .filter(|row| !only_favorites || row.favorite)
        .collect()
}

fn show(ctx: &AppContext, id: &str) -> Result<(), RichError> {
    let prompt = ctx.catalog.require_prompt(id)?;
    let favorites = FavoritesController::load(ctx.store());
    let category = ctx.catalog.prompt_category_of(id).unwrap_or_default();

    let star = if favorites.contains(id) { " ★" } else { "" };
    println!("{}{}", prompt.title.bold(), star.yellow());
    println!("{}", prompt.description.dimmed());
    println!("分类: {}  标签: {}", category_name(category), prompt.tags.join(", "));
    println!();
    println!("{}", prompt.template);
    Ok(())
}

fn favorite(ctx: &AppContext, id: &str) -> Result<(), RichError> {
    let prompt = ctx.catalog.require_prompt(id)?;
    let mut favorites = FavoritesController::load(ctx.store());
    if favorites.toggle(id) {
        output::print_success(&format!("已收藏 {} ({})", prompt.title, id));
    } else {
        output::print_success(&format!("已取消收藏 {} ({})", prompt.title, id));
    }
    Ok(())
}

async fn copy<C: Clipboard>(ctx: &AppContext, clipboard: &C, id: &str) -> Result<(), RichError> {
    let prompt = ctx.catalog.require_prompt(id)?;
    if copy_template(clipboard, id, &prompt.template).await {
        output::print_success(&format!("已复制 {} ({})", prompt.title, id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "prompts_test.rs"]
mod tests;

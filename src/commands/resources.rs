//! ailp resources コマンド

use super::AppContext;
use crate::display::{rating_stars, resource_category_name, IconKind};
use crate::error::RichError;
use crate::filter::{filter_resources, Selector};
use crate::output::{self, new_table, EMPTY_STATE};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Filter by category (docs, tutorials, tools, community, all)
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args, ctx: &AppContext) -> Result<(), RichError> {
    let selector = Selector::parse(&args.category);
    let resources = filter_resources(&ctx.catalog.resources, &selector);

    if args.json {
        return output::print_json(&resources);
    }
    if resources.is_empty() {
        output::print_empty(EMPTY_STATE);
        return Ok(());
    }

    let mut table = new_table(vec!["", "Category", "Title", "Description", "Rating"]);
    for resource in &resources {
        table.add_row(vec![
            IconKind::from_key(&resource.icon).glyph().to_string(),
            resource_category_name(&resource.category).to_string(),
            resource.title.clone(),
            output::truncate(&resource.description, 36),
            rating_stars(resource.rating),
        ]);
    }
    println!("{table}");
    Ok(())
}

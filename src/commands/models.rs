//! ailp models コマンド
//!
//! 大模型を種別で絞り込んで表示する。

use super::AppContext;
use crate::catalog::{EntryId, Model};
use crate::display::model_type_name;
use crate::error::{AilpError, RichError};
use crate::filter::{filter_models, Selector};
use crate::output::{self, new_table, EMPTY_STATE};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Filter by model type
    #[arg(
        long = "type",
        default_value = "all",
        value_parser = ["all", "text", "image", "audio", "multimodal"]
    )]
    pub kind: String,

    /// Show the feature list of one model
    #[arg(long, value_name = "ID")]
    pub expand: Option<EntryId>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args, ctx: &AppContext) -> Result<(), RichError> {
    let selector = Selector::parse(&args.kind);
    let models = filter_models(&ctx.catalog.models, &selector);
    tracing::debug!(selector = selector.label(), count = models.len(), "listing models");

    let expanded = match args.expand {
        Some(id) => Some(find_visible(&models, id)?),
        None => None,
    };

    if args.json {
        return match expanded {
            Some(model) => output::print_json(model),
            None => output::print_json(&models),
        };
    }

    if models.is_empty() {
        output::print_empty(EMPTY_STATE);
        return Ok(());
    }

    print_table(&models);
    if let Some(model) = expanded {
        print_features(model);
    }
    Ok(())
}

/// 絞り込み後の一覧から展開対象を探す
fn find_visible<'a>(models: &[&'a Model], id: EntryId) -> Result<&'a Model, AilpError> {
    models
        .iter()
        .find(|m| m.id == id)
        .copied()
        .ok_or_else(|| AilpError::not_found("model", id))
}

fn print_table(models: &[&Model]) {
    let mut table = new_table(vec!["ID", "Name", "Type", "Company", "Description"]);
    for model in models {
        table.add_row(vec![
            model.id.to_string(),
            model.name.clone(),
            model_type_name(model.kind.as_str()).to_string(),
            model.company.clone(),
            output::truncate(&model.description, 40),
        ]);
    }
    println!("{table}");
    println!("{} model(s)", models.len());
}

fn print_features(model: &Model) {
    println!();
    output::print_heading(&model.name, "主要特性");
    for feature in &model.features {
        println!("  ✓ {feature}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn find_visible_respects_filter() {
        let catalog = Catalog::bundled().unwrap();
        let audio = filter_models(&catalog.models, &Selector::parse("audio"));
        assert_eq!(find_visible(&audio, 7).unwrap().name, "Whisper");
        assert!(matches!(
            find_visible(&audio, 1),
            Err(AilpError::NotFound { kind: "model", .. })
        ));
    }
}

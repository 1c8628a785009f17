//! ailp workflows コマンド

use super::AppContext;
use crate::catalog::{EntryId, Workflow};
use crate::error::{AilpError, RichError};
use crate::output::{self, new_table};
use crate::state::ExpandState;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Show the steps of one workflow
    #[arg(long, value_name = "ID")]
    pub expand: Option<EntryId>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args, ctx: &AppContext) -> Result<(), RichError> {
    let workflows = &ctx.catalog.workflows;

    let mut expand = ExpandState::new();
    if let Some(id) = args.expand {
        ctx.catalog
            .find_workflow(id)
            .ok_or_else(|| AilpError::not_found("workflow", id))?;
        expand.toggle(id);
    }

    if args.json {
        return match expand.expanded().and_then(|id| ctx.catalog.find_workflow(*id)) {
            Some(workflow) => output::print_json(workflow),
            None => output::print_json(workflows),
        };
    }

    let mut table = new_table(vec!["ID", "Name", "Description", "Steps", "Tools"]);
    for workflow in workflows {
        let marker = if expand.is_expanded(&workflow.id) { "▾" } else { "▸" };
        table.add_row(vec![
            format!("{marker} {}", workflow.id),
            workflow.name.clone(),
            output::truncate(&workflow.description, 36),
            workflow.steps.len().to_string(),
            workflow.tools.join(", "),
        ]);
    }
    println!("{table}");

    if let Some(workflow) = expand.expanded().and_then(|id| ctx.catalog.find_workflow(*id)) {
        print_steps(workflow);
    }
    Ok(())
}

fn print_steps(workflow: &Workflow) {
    println!();
    output::print_heading(&workflow.name, &workflow.description);
    for step in &workflow.steps {
        println!("  {}. {}  {}", step.step, step.title, step.description);
    }
}

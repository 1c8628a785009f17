//! ailp agents コマンド

use super::AppContext;
use crate::display::IconKind;
use crate::error::RichError;
use crate::output::{self, new_table};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args, ctx: &AppContext) -> Result<(), RichError> {
    let agents = &ctx.catalog.agents;
    if args.json {
        return output::print_json(agents);
    }

    let mut table = new_table(vec!["ID", "", "Name", "Description", "Capabilities", "Use cases"]);
    for agent in agents {
        table.add_row(vec![
            agent.id.to_string(),
            IconKind::from_key(&agent.icon).glyph().to_string(),
            agent.name.clone(),
            output::truncate(&agent.description, 30),
            agent.capabilities.join(" · "),
            agent.use_cases.join(" · "),
        ]);
    }
    println!("{table}");
    Ok(())
}

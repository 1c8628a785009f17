//! ailp routes コマンド

use crate::error::RichError;
use crate::output::new_table;
use crate::route::Page;

pub fn run() -> Result<(), RichError> {
    let mut table = new_table(vec!["Path", "Page"]);
    for page in Page::all() {
        table.add_row(vec![page.path(), page.title()]);
    }
    println!("{table}");
    Ok(())
}

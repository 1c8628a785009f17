mod catalog;
mod cli;
mod clipboard;
mod commands;
mod config;
mod display;
mod env;
mod error;
mod filter;
mod logging;
mod output;
mod route;
mod state;
mod storage;
mod tui;

use clap::Parser;
use commands::AppContext;
use error::{ErrorContext, ErrorFormatter, RichError};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    let verbose = cli.verbose;

    if let Err(err) = run(cli).await {
        eprintln!("{}", ErrorFormatter::new(verbose).format(&err));
        std::process::exit(1);
    }
}

async fn run(cli: cli::Cli) -> Result<(), RichError> {
    let data_dir = env::EnvVar::data_dir();
    let config_path = data_dir.join(config::CONFIG_FILE);
    let config = config::Config::load_from(&config_path).map_err(|e| {
        RichError::from(e).with_context(ErrorContext::new().with_file_path(&config_path))
    })?;

    // ログを書けなくてもコマンドは続行する
    if let Err(e) = logging::initialize_logging(&data_dir, config.log_filter.as_deref()) {
        eprintln!("warning: logging disabled: {e}");
    }

    let catalog = catalog::Catalog::bundled()?;
    let ctx = AppContext {
        catalog,
        config,
        data_dir,
    };
    commands::dispatch(cli.command, ctx).await
}

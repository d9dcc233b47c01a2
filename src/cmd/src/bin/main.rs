use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use cmd::command::export;
use cmd::command::export::Export;
use cmd::command::page;
use cmd::command::page::Page;
use cmd::config;
use cmd::error::Error;
use cmd::error::Result;
use common::tracing::TracingCliArgs;
use tracing::debug;
use tracing::info;

#[derive(Subcommand, Clone)]
enum Commands {
    /// Render the demo page
    Page(Page),
    /// Write the generated days to a CSV/TSV file
    Export(Export),
}

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(flatten)]
    tracing: TracingCliArgs,
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let Some(command) = &args.command else {
        return Err(Error::BadRequest("no command specified".to_string()));
    };

    let cfg = config::load(args.config.as_deref())?;
    args.tracing.init(cfg.log.level)?;

    let version = env!("CARGO_PKG_VERSION");
    info!("sonar-demo v{version}");
    debug!("config: {:?}", cfg);

    match command {
        Commands::Page(args) => page::start(args, cfg)?,
        Commands::Export(args) => export::start(args, cfg)?,
    }

    Ok(())
}

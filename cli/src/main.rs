mod commands;
mod terminal;

use commands::{CommandLine, Commands, info, walk};
use netwalk_common::config::Config;
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let mut cfg = Config {
        quiet: commands.quiet,
        no_color: commands.no_color,
        limit: None,
    };

    logging::init_logging(&cfg)?;

    match commands.command {
        Commands::Walk { target, limit } => {
            cfg.limit = limit;
            walk::walk(target, &cfg).await
        }
        Commands::Info { target } => info::info(target, &cfg),
    }
}

pub mod info;
pub mod walk;

use clap::{ArgAction, Parser, Subcommand};
use netwalk_common::network::target::Target;

#[derive(Parser)]
#[command(name = "netwalk")]
#[command(about = "Walk every address of a CIDR block.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
    /// Print less; repeat to silence headers and info logs
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every address in a block, lowest first
    #[command(alias = "w")]
    Walk {
        /// CIDR block or single host
        target: Target,
        /// Stop after this many addresses
        #[arg(short, long)]
        limit: Option<u64>,
    },
    /// Show the bounds of a block without walking it
    #[command(alias = "i")]
    Info { target: Target },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

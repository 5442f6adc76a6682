use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "atomw",
    about = "Atomic and molecular weight calculator",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up the atomic weight of one or more elements
    #[command(visible_alias = "e")]
    Element(ElementArgs),

    /// Compute the molecular weight of one or more formulas
    #[command(visible_alias = "c")]
    Compound(CompoundArgs),
}

/// Options shared by all commands.
#[derive(Args)]
pub struct GlobalOptions {
    /// Element dataset (JSON with an `elements` array); bundled table if omitted
    #[arg(short, long, value_name = "FILE", global = true)]
    pub table: Option<PathBuf>,

    /// Decimal places for printed weights
    #[arg(short, long, value_name = "N", default_value = "3", global = true)]
    pub precision: usize,

    /// Suppress summaries and log output (for scripting)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl GlobalOptions {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Args)]
pub struct ElementArgs {
    /// Atomic symbols, e.g. O He Ti
    #[arg(value_name = "SYMBOL", required = true)]
    pub symbols: Vec<String>,
}

#[derive(Args)]
pub struct CompoundArgs {
    /// Chemical formulas, e.g. H2O CaCO3
    #[arg(value_name = "FORMULA", required = true)]
    pub formulas: Vec<String>,

    /// Print a per-element breakdown table for each formula
    #[arg(short, long)]
    pub breakdown: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

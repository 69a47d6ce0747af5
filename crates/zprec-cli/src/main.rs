// crates/zprec-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "zprec-cli")]
#[command(about = "R16F vs R16Unorm depth precision study", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Step sizes and advantage ratio at key normalized depths
    Compare(cmd::compare::CompareArgs),

    /// Log-spaced normalized depth sweep + crossover scan
    Sweep(cmd::sweep::SweepArgs),

    /// Eye-space analysis per far plane (SSAO range coverage, crossovers in meters)
    Eye(cmd::eye::EyeArgs),

    /// Write a static HTML summary of the whole study
    Report(cmd::report::ReportArgs),

    /// Study tools (.zps)
    Study(cmd::study::StudyArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Compare(args) => cmd::compare::run(args),
        Commands::Sweep(args) => cmd::sweep::run(args),
        Commands::Eye(args) => cmd::eye::run(args),
        Commands::Report(args) => cmd::report::run(args),
        Commands::Study(args) => cmd::study::run(args),
    }
}

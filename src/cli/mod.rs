pub mod commands;
pub mod output;
pub mod progress;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "builddoctor", version, about = "Diagnose failed mobile CI builds from their logs")]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a build log and print recommendations
    Analyze(commands::analyze::AnalyzeArgs),
    /// Run the generated cleanup commands for a build log
    Fix(commands::fix::FixArgs),
    /// Write a diagnosis report to a file
    Report(commands::report::ReportArgs),
    /// Create a .builddoctor.yml config file
    Init(commands::init::InitArgs),
}

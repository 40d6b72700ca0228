pub mod generate;

use std::path::PathBuf;

use clap::Parser;
use poolmap_common::config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT, ReportTemplate};

#[derive(Parser)]
#[command(name = "poolmap")]
#[command(about = "Groups WARP endpoints by /24 pool into a Markdown report.")]
pub struct CommandLine {
    /// CSV file with an `IP:Port` column
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Markdown file to overwrite with the report
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Collapse repeated ports of the same address
    #[arg(long)]
    pub dedup_ports: bool,

    /// Print the report to stdout instead of writing the output file
    #[arg(long)]
    pub stdout: bool,

    /// Reduce terminal output (-q hides progress, -qq hides warnings)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            input: self.input.clone(),
            output: self.output.clone(),
            dedup_ports: self.dedup_ports,
            template: ReportTemplate::default(),
        }
    }
}

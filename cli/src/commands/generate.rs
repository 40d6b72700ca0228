use std::time::{Duration, Instant};

use colored::*;
use poolmap_common::config::Config;
use poolmap_core::pipeline::{self, Summary};

use crate::terminal::{colors, print};

pub fn generate(cfg: &Config, to_stdout: bool) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();

    if to_stdout {
        let report = pipeline::prepare(cfg)?;
        print!("{}", report.document);
        return Ok(());
    }

    let summary: Summary = pipeline::run(cfg)?;
    print_summary(&summary, start_time.elapsed());
    Ok(())
}

fn print_summary(summary: &Summary, total_time: Duration) {
    print::header("Endpoint Report");
    print::aligned_line("Pools", summary.pools.to_string());
    print::aligned_line("Endpoints", summary.endpoints.to_string());
    print::aligned_line("Output", summary.output.display().to_string());

    let pools: ColoredString = format!("{} pools", summary.pools).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Report Complete: {pools} written in {total_time}").color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output.to_string());
}

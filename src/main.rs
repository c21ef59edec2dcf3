//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `dom_census` library that parses arguments,
//! initializes logging and prints the result set.

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use std::process;

use dom_census::initialization::init_logger_with;
use dom_census::{render_jsonl, render_table, run_census, Config, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    if let Err(e) = config.validate() {
        eprintln!("dom_census error: {e}");
        process::exit(1);
    }

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let output = config.output;
    match run_census(config).await {
        Ok(report) => {
            match output {
                OutputFormat::Table => {
                    print!("{}", render_table(&report.rows));
                    println!("Elapsed time {:.3} seconds", report.elapsed_seconds);
                }
                OutputFormat::Jsonl => {
                    let lines =
                        render_jsonl(&report.rows).context("Failed to serialize results")?;
                    print!("{lines}");
                }
            }
            let failed = report.failed();
            if failed > 0 {
                warn!(
                    "{} of {} documents could not be counted",
                    failed,
                    report.rows.len()
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("dom_census error: {:#}", e);
            process::exit(1);
        }
    }
}

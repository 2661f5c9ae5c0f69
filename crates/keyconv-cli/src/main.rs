use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::filter::LevelFilter;

mod cli;
mod commands;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match commands::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let tag = format!("error[{}]", commands::error_tag(&err));
            eprintln!("{} {err:#}", format!("{tag}:").red().bold());
            ExitCode::FAILURE
        }
    }
}

mod add_cmd;
mod cli;
mod diff_cmd;
mod fmt_cmd;
mod logging;
mod now_cmd;
mod parse_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Now(args) => now_cmd::run(args),
        Command::Parse(args) => parse_cmd::run(args),
        Command::Add(args) => add_cmd::run(args),
        Command::Diff(args) => diff_cmd::run(args),
        Command::Fmt(args) => fmt_cmd::run(args),
    }
}

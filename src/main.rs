mod cli;
mod config;
mod convert;
mod convert_cmd;
mod ephemeris_cmd;
mod generate_cmd;
mod latex_cmd;
mod logging;

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
        Command::Convert(args) => convert_cmd::run(args),
        Command::Ephemeris(args) => ephemeris_cmd::run(args),
        Command::Generate(args) => generate_cmd::run(args),
        Command::Latex(args) => latex_cmd::run(args),
    }
}

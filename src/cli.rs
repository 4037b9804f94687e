use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Chronal solar calendar generator.
#[derive(Parser)]
#[command(
    name = "chronal",
    version,
    about = "Solar-term calendar and balanced base-24 chronology generator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print an integer as a chronal numeral.
    Convert(ConvertArgs),
    /// Locate solar terms and append one pattern line per year.
    Ephemeris(EphemerisArgs),
    /// Build half-day labels from a pattern file.
    Generate(GenerateArgs),
    /// Append LaTeX table rows from a pattern file.
    Latex(LatexArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Integer to convert.
    #[arg(allow_hyphen_values = true)]
    pub value: i64,
}

/// Arguments for the `ephemeris` subcommand.
#[derive(clap::Args)]
pub struct EphemerisArgs {
    /// Path to TOML configuration file [default: chronal.toml if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the pattern output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the number of years from config.
    #[arg(short = 'n', long = "years")]
    pub n_years: Option<u32>,
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file [default: chronal.toml if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the pattern input path from config.
    #[arg(short, long)]
    pub patterns: Option<PathBuf>,

    /// Override the label output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `latex` subcommand.
#[derive(clap::Args)]
pub struct LatexArgs {
    /// Path to TOML configuration file [default: chronal.toml if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the pattern input path from config.
    #[arg(short, long)]
    pub patterns: Option<PathBuf>,

    /// Override the table output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Gregorian year of the first row [default: derived from the first pattern].
    #[arg(long = "gregorian-start", allow_hyphen_values = true)]
    pub gregorian_start: Option<i64>,
}

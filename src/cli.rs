use clap::{Parser, Subcommand};

/// Kairos calendar date/time toolkit.
#[derive(Parser)]
#[command(name = "kairos", version, about = "Calendar date/time toolkit")]
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
    /// Print the current moment.
    Now(NowArgs),
    /// Parse a date-time expression and print the result.
    Parse(ParseArgs),
    /// Apply a relative modifier to a date-time.
    Add(AddArgs),
    /// Print the difference between two date-times.
    Diff(DiffArgs),
    /// Render a date-time with a named or custom template.
    Fmt(FmtArgs),
}

/// Arguments for the `now` subcommand.
#[derive(clap::Args)]
pub struct NowArgs {
    /// Timezone to view the moment in (IANA name or +HH:MM offset).
    #[arg(short, long)]
    pub zone: Option<String>,
}

/// Arguments for the `parse` subcommand.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// Input: a literal date-time, Unix timestamp, bare time-of-day or
    /// relative expression ("+2 days", "next tuesday").
    pub input: String,

    /// Timezone to interpret naive input in.
    #[arg(short, long)]
    pub zone: Option<String>,

    /// Explicit strftime format the input must match.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Base date-time expression.
    pub input: String,

    /// Relative modifier to apply ("+3 weekdays", "first day of next month").
    pub modifier: String,

    /// Timezone to interpret naive input in.
    #[arg(short, long)]
    pub zone: Option<String>,
}

/// Arguments for the `diff` subcommand.
#[derive(clap::Args)]
pub struct DiffArgs {
    /// First date-time expression.
    pub a: String,

    /// Second date-time expression.
    pub b: String,

    /// Render the difference as a human phrase ("3 days after").
    #[arg(long)]
    pub human: bool,

    /// Drop the direction; report the bare magnitude.
    #[arg(long)]
    pub absolute: bool,
}

/// Arguments for the `fmt` subcommand.
#[derive(clap::Args)]
pub struct FmtArgs {
    /// Date-time expression to render.
    pub input: String,

    /// Template name (DATE, DATETIME, ATOM, RFC2822, ...) or a custom
    /// strftime pattern.
    pub template: String,
}

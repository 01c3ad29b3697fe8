use clap::Parser;

/// Parse, canonicalize and compare ISO 8601 dates and times.
#[derive(Parser)]
#[command(
    name = "iso8601",
    version,
    about = "Parse, canonicalize and compare ISO 8601 dates and times",
    after_help = "Separate independent inputs with ';'. Join two inputs with '^' or '∧' to compare them."
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only accept ISO 8601-1 shapes (no decades or sub-year groupings).
    #[arg(long)]
    pub strict: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Inputs to evaluate. Read one per line from stdin when omitted.
    pub inputs: Vec<String>,
}

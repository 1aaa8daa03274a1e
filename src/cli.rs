use clap::Parser;

/// Print Gregorian dates in the Tranquility calendar.
#[derive(Parser)]
#[command(
    name = "tqdate",
    version,
    about = "Convert Gregorian dates into the Tranquility calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Gregorian date to convert. Dates are read line by line from stdin if
    /// omitted.
    #[arg(short, long, conflicts_with = "today")]
    pub input: Option<String>,

    /// strftime-style format of the input dates. Formats with a time of day
    /// and an optional UTC offset are accepted too.
    #[arg(short = 'f', long = "input-format", default_value = "%Y-%m-%d")]
    pub input_format: String,

    /// Use the short output format, e.g. "28M -1".
    #[arg(short, long)]
    pub short: bool,

    /// Print today's date (UTC) in both long and short formats.
    #[arg(short, long)]
    pub today: bool,
}

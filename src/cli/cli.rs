use clap::Parser;

use crate::application::data::LogLevel;

/// Print the name and contents of every readable text file in the current
/// directory.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

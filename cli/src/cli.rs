use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(about, version, name = "oxsdatetime")]
/// Inspect, normalize and compare XML Schema date/time literals
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
    /// Format of the logs written to stderr
    ///
    /// The log level is set with the RUST_LOG environment variable and defaults to "warn".
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse literals and print their canonical and UTC forms separated by a tab
    ///
    /// Fails on the first invalid literal.
    Parse {
        /// Datatype of the literals
        #[arg(short = 't', long = "type", value_enum, default_value_t = SubtypeArg::DateTime)]
        subtype: SubtypeArg,
        /// Literal(s) to parse
        ///
        /// Literals starting with '-' like "--02-29" must come after a "--" separator.
        #[arg(required = true)]
        lexical: Vec<String>,
    },
    /// Compare two literals and print "<", "=", ">" or "indeterminate"
    ///
    /// A literal without timezone is only comparable with a literal with one if they are more than 14 hours apart.
    Compare {
        /// Datatype of the literals
        #[arg(short = 't', long = "type", value_enum, default_value_t = SubtypeArg::DateTime)]
        subtype: SubtypeArg,
        /// Left hand side literal
        left: String,
        /// Right hand side literal
        right: String,
    },
    /// Validate the literals read from stdin, one per line
    ///
    /// Every invalid line is printed with its error and the command fails if there is at least one.
    Check {
        /// Datatype of the literals
        #[arg(short = 't', long = "type", value_enum, default_value_t = SubtypeArg::DateTime)]
        subtype: SubtypeArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SubtypeArg {
    #[value(name = "dateTime")]
    DateTime,
    #[value(name = "time")]
    Time,
    #[value(name = "date")]
    Date,
    #[value(name = "gYearMonth")]
    GYearMonth,
    #[value(name = "gYear")]
    GYear,
    #[value(name = "gMonthDay")]
    GMonthDay,
    #[value(name = "gMonth")]
    GMonth,
    #[value(name = "gDay")]
    GDay,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Human readable lines
    Text,
    /// One JSON object per event
    Json,
}

#![allow(clippy::print_stderr, clippy::print_stdout)]
use crate::cli::{Args, Command, LogFormat, SubtypeArg};
use anyhow::{Context, bail};
use clap::Parser;
use oxsdatetime::{TemporalOrdering, TemporalSubtype, compare, parse};
use std::io::{BufRead, BufWriter, Write, stdin, stdout};
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    let matches = Args::parse();
    init_logging(matches.log_format);
    match matches.command {
        Command::Parse { subtype, lexical } => {
            let subtype = TemporalSubtype::from(subtype);
            let mut output = BufWriter::new(stdout().lock());
            for lexical in lexical {
                let value = parse(&lexical, subtype)
                    .with_context(|| format!("{lexical:?} is not a valid {subtype}"))?;
                writeln!(output, "{value}\t{}", value.to_utc_string())?;
            }
            output.flush()?;
            Ok(())
        }
        Command::Compare {
            subtype,
            left,
            right,
        } => {
            let subtype = TemporalSubtype::from(subtype);
            let left = parse(&left, subtype)
                .with_context(|| format!("{left:?} is not a valid {subtype}"))?;
            let right = parse(&right, subtype)
                .with_context(|| format!("{right:?} is not a valid {subtype}"))?;
            let ordering = compare(&left, &right);
            tracing::debug!(%left, %right, ?ordering, "compared");
            println!(
                "{}",
                match ordering {
                    TemporalOrdering::Less => "<",
                    TemporalOrdering::Equal => "=",
                    TemporalOrdering::Greater => ">",
                    TemporalOrdering::Indeterminate => "indeterminate",
                }
            );
            Ok(())
        }
        Command::Check { subtype } => {
            let subtype = TemporalSubtype::from(subtype);
            let mut output = BufWriter::new(stdout().lock());
            let mut checked = 0_usize;
            let mut invalid = 0_usize;
            for (i, line) in stdin().lock().lines().enumerate() {
                let line = line.context("Failed to read stdin")?;
                checked += 1;
                if let Err(error) = parse(&line, subtype) {
                    invalid += 1;
                    writeln!(output, "{}: {line:?}: {error}", i + 1)?;
                }
            }
            output.flush()?;
            tracing::info!(checked, invalid, %subtype, "check done");
            if invalid > 0 {
                bail!("{invalid} of the {checked} literal(s) are not valid {subtype}");
            }
            Ok(())
        }
    }
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

impl From<SubtypeArg> for TemporalSubtype {
    fn from(subtype: SubtypeArg) -> Self {
        match subtype {
            SubtypeArg::DateTime => Self::DateTime,
            SubtypeArg::Time => Self::Time,
            SubtypeArg::Date => Self::Date,
            SubtypeArg::GYearMonth => Self::GYearMonth,
            SubtypeArg::GYear => Self::GYear,
            SubtypeArg::GMonthDay => Self::GMonthDay,
            SubtypeArg::GMonth => Self::GMonth,
            SubtypeArg::GDay => Self::GDay,
        }
    }
}

//! Command-line argument parsing.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::sort::{Algorithm, Direction};
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the interactive visualizer.
    Interactive(Config),
    /// Sort once without a terminal and print every step as JSON.
    Trace {
        algorithm: Algorithm,
        direction: Direction,
        /// Explicit values; generated from `config` when absent.
        values: Option<Vec<i64>>,
        config: Config,
    },
    Help,
    Version,
}

/// Parse arguments after the program name.
pub fn parse_from<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let (is_trace, rest) = match args.first().map(String::as_str) {
        Some("trace") => (true, &args[1..]),
        _ => (false, &args[..]),
    };

    let mut config = Config::default();
    let mut algorithm = Algorithm::default();
    let mut direction = Direction::default();
    let mut values = None;

    let mut i = 0usize;
    while i < rest.len() {
        let arg = rest[i].as_str();
        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--count" | "-n" => config.count = parse_num(arg, value_of(rest, i)?)?,
            "--min" => config.min_value = parse_num(arg, value_of(rest, i)?)?,
            "--max" => config.max_value = parse_num(arg, value_of(rest, i)?)?,
            "--seed" => config.seed = Some(parse_num(arg, value_of(rest, i)?)?),
            "--log-file" => config.log_file = Some(PathBuf::from(value_of(rest, i)?)),
            "--algorithm" | "-a" if is_trace => {
                let name = value_of(rest, i)?;
                algorithm =
                    Algorithm::parse(name).ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))?;
            }
            "--values" if is_trace => values = Some(parse_values(value_of(rest, i)?)?),
            "--descending" if is_trace => {
                direction = Direction::Descending;
                i += 1;
                continue;
            }
            "--ascending" if is_trace => {
                direction = Direction::Ascending;
                i += 1;
                continue;
            }
            _ => return Err(Error::UnknownArgument(arg.to_string())),
        }
        // every remaining flag consumed a value
        i += 2;
    }

    config.validate()?;
    if is_trace {
        Ok(Command::Trace {
            algorithm,
            direction,
            values,
            config,
        })
    } else {
        Ok(Command::Interactive(config))
    }
}

fn value_of(args: &[String], i: usize) -> Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| Error::MissingValue(args[i].clone()))
}

fn parse_num<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

// comma separated, e.g. "5,3,8,1"
fn parse_values(s: &str) -> Result<Vec<i64>> {
    let values = s
        .split(',')
        .filter(|t| !t.trim().is_empty())
        .map(|t| parse_num("--values", t))
        .collect::<Result<Vec<i64>>>()?;
    if values.is_empty() {
        return Err(Error::EmptyArray);
    }
    Ok(values)
}

pub fn help_text() -> String {
    let lines = [
        "sortvis - animated bubble and insertion sort in the terminal",
        "",
        "Usage:",
        "  sortvis [--count N] [--min V] [--max V] [--seed S] [--log-file PATH]",
        "  sortvis trace [--algorithm bubble|insertion] [--descending] [--values 5,3,8,1]",
        "                [--count N] [--min V] [--max V] [--seed S]",
        "",
        "Options:",
        "  -n, --count N      Number of bars (default 50).",
        "  --min V, --max V   Inclusive value range (default 0..100).",
        "  --seed S           Seed for reproducible arrays.",
        "  --log-file PATH    Write logs to PATH (filter with RUST_LOG).",
        "  -h, --help         Show this help message.",
        "  -V, --version      Show the version.",
        "",
        "Keys:",
        "  R reset   SPACE start sorting   A ascending   D descending",
        "  I insertion sort   B bubble sort   Q/Esc quit",
    ];
    lines.join("\n")
}

//! # Command Line
//!
//! Flag parsing for the `stockroom-console` binary.
//!
//! ## Usage
//! ```bash
//! # Dashboard plus page 1 of the five sample products
//! stockroom-console
//!
//! # 250 generated products, low-stock rows only, page 2
//! stockroom-console --count 250 --status "Low Stock" --page 2
//!
//! # Machine-readable output
//! stockroom-console --search lamp --json
//! ```

use stockroom_core::StatusFilter;
use thiserror::Error;

/// Help text printed by `--help` and after argument errors.
pub const USAGE: &str = "\
Stockroom inventory console

Usage: stockroom-console [OPTIONS]

Options:
  -c, --count <N>        Generate N products instead of the sample set
  -s, --search <TEXT>    Only show products whose code or name contains TEXT
      --status <STATUS>  All, \"In Stock\", \"Low Stock\" or \"Out of Stock\" (default: All)
  -p, --page <N>         Table page to show (default: 1)
      --json             Print the dashboard and page as JSON
  -h, --help             Show this help message

Environment:
  STOCKROOM_LATENCY_MS       Simulated store latency (default: 600)
  STOCKROOM_SEED             Start with the sample products (default: true)
  STOCKROOM_CURRENCY_SYMBOL  Currency symbol for text output (default: $)
  RUST_LOG                   Log filter (default: info,stockroom=debug)";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub count: Option<usize>,
    pub search: Option<String>,
    pub status: StatusFilter,
    pub page: usize,
    pub json: bool,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            count: None,
            search: None,
            status: StatusFilter::All,
            page: 1,
            json: false,
            help: false,
        }
    }
}

/// Command line errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("{flag} expects a number, got '{value}'")]
    InvalidNumber { flag: String, value: String },

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("unknown argument '{0}'")]
    Unknown(String),
}

/// Parses arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--count" | "-c" => {
                let value = next_value(&mut args, &arg)?;
                parsed.count = Some(parse_number(&arg, &value)?);
            }
            "--search" | "-s" => {
                parsed.search = Some(next_value(&mut args, &arg)?);
            }
            "--status" => {
                let value = next_value(&mut args, &arg)?;
                parsed.status = value
                    .parse()
                    .map_err(|_| ArgsError::InvalidStatus(value.clone()))?;
            }
            "--page" | "-p" => {
                let value = next_value(&mut args, &arg)?;
                parsed.page = parse_number(&arg, &value)?;
            }
            "--json" => parsed.json = true,
            "--help" | "-h" => parsed.help = true,
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }

    Ok(parsed)
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, ArgsError> {
    args.next()
        .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

fn parse_number(flag: &str, value: &str) -> Result<usize, ArgsError> {
    value.trim().parse().map_err(|_| ArgsError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&[
            "--count", "250", "-s", "desk", "--status", "Low Stock", "-p", "2", "--json",
        ])
        .unwrap();

        assert_eq!(args.count, Some(250));
        assert_eq!(args.search.as_deref(), Some("desk"));
        assert_eq!(args.status, StatusFilter::LowStock);
        assert_eq!(args.page, 2);
        assert!(args.json);
        assert!(!args.help);
    }

    #[test]
    fn test_status_spellings() {
        assert_eq!(
            parse(&["--status", "out-of-stock"]).unwrap().status,
            StatusFilter::OutOfStock
        );
        assert_eq!(parse(&["--status", "all"]).unwrap().status, StatusFilter::All);
        assert_eq!(
            parse(&["--status", "plenty"]),
            Err(ArgsError::InvalidStatus("plenty".to_string()))
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse(&["--page"]),
            Err(ArgsError::MissingValue("--page".to_string()))
        );
        assert!(matches!(
            parse(&["--count", "many"]),
            Err(ArgsError::InvalidNumber { .. })
        ));
        assert_eq!(
            parse(&["--verbose"]),
            Err(ArgsError::Unknown("--verbose".to_string()))
        );
    }
}

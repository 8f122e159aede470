//! Invocation settings.
//!
//! Flags on the command line take precedence over the environment:
//!
//! - `TOWER_COST_FORMAT`: `text` (default) or `json`

use crate::error::{Error, Result};
use std::str::FromStr;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::InvalidFormat(other.to_string())),
        }
    }
}

/// Settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliConfig {
    /// Output format
    pub format: OutputFormat,

    /// Also run the exhaustive search and compare
    pub exhaustive: bool,

    /// Heights given on the command line, if any
    pub heights: Vec<i64>,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CliConfig),
    Help,
}

impl CliConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self> {
        let format = match std::env::var("TOWER_COST_FORMAT") {
            Ok(value) => value.parse()?,
            Err(_) => OutputFormat::default(),
        };
        Ok(Self {
            format,
            ..Self::default()
        })
    }

    /// Apply command-line arguments (without the program name) on top of `self`.
    pub fn parse_args<I, S>(mut self, args: I) -> Result<Command>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "-h" | "--help" | "help" => return Ok(Command::Help),
                "--json" => self.format = OutputFormat::Json,
                "--text" => self.format = OutputFormat::Text,
                "--exhaustive" => self.exhaustive = true,
                flag if flag.starts_with("--") => {
                    return Err(Error::UnknownOption(flag.to_string()));
                }
                other => match parse_heights(other) {
                    Ok(heights) => self.heights.extend(heights),
                    // Negative heights start with '-'; only non-numeric ones are flags.
                    Err(_) if other.starts_with('-') => {
                        return Err(Error::UnknownOption(other.to_string()));
                    }
                    Err(e) => return Err(e),
                },
            }
        }
        Ok(Command::Run(self))
    }
}

/// Parse heights separated by whitespace and/or commas.
pub fn parse_heights(input: &str) -> Result<Vec<i64>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(|token| token.trim_matches(|c| c == '[' || c == ']'))
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse()
                .map_err(|_| Error::InvalidHeight(token.to_string()))
        })
        .collect()
}

//! tower-eval CLI
//!
//! Evaluates the minimum adjustment cost of a tower.
//!
//! Usage:
//!   tower-eval [--json|--text] [--exhaustive] [HEIGHT ...]
//!
//! With no heights on the command line, heights are read from stdin. With no
//! input at all, the sample towers are evaluated.

mod config;
mod error;

use config::{parse_heights, CliConfig, Command, OutputFormat};
use error::Result;
use serde::Serialize;
use std::io::{IsTerminal, Read};
use tower_cost::{analyze, min_adjustment_cost_exhaustive, AdjustmentReport, SAMPLE_TOWERS};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// One evaluated tower.
#[derive(Debug, Serialize)]
struct Evaluation {
    heights: Vec<i64>,
    report: AdjustmentReport<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exhaustive: Option<i64>,
}

impl Evaluation {
    fn new(heights: Vec<i64>, exhaustive: bool) -> Result<Self> {
        let report = analyze(&heights)?;
        let exhaustive = if exhaustive {
            let cost = min_adjustment_cost_exhaustive(&heights)?;
            if cost != report.cost {
                warn!(linear = report.cost, exhaustive = cost, "evaluations disagree");
            }
            Some(cost)
        } else {
            None
        };
        Ok(Self {
            heights,
            report,
            exhaustive,
        })
    }
}

fn render(evaluations: &[Evaluation], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(evaluations)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for eval in evaluations {
                out.push_str(&format!("{:?} -> {}", eval.heights, eval.report.cost));
                if let Some(stop) = eval.report.stop_index {
                    out.push_str(&format!(" (stop at index {})", stop));
                }
                if let Some(cost) = eval.exhaustive {
                    let verdict = if cost == eval.report.cost { "agrees" } else { "DISAGREES" };
                    out.push_str(&format!(" [exhaustive {}: {}]", verdict, cost));
                }
                out.push('\n');
            }
            Ok(out)
        }
    }
}

fn print_usage() {
    eprintln!("tower-eval - Minimum adjustment cost of a tower of heights");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  tower-eval [OPTIONS] [HEIGHT ...]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json        Print the full breakdown as JSON");
    eprintln!("  --text        Print one line per tower (default)");
    eprintln!("  --exhaustive  Cross-check with the exhaustive search (at most 20 heights)");
    eprintln!("  -h, --help    Show this message");
    eprintln!();
    eprintln!("Heights are read from stdin when none are given.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TOWER_COST_FORMAT  Default output format: text or json");
    eprintln!("  RUST_LOG           Log filter (default: tower_cost=info,tower_eval=info)");
}

/// Towers to evaluate: argv, then stdin, then the samples.
fn collect_towers(config: &CliConfig) -> Result<Vec<Vec<i64>>> {
    if !config.heights.is_empty() {
        return Ok(vec![config.heights.clone()]);
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut input = String::new();
        stdin.lock().read_to_string(&mut input)?;
        let heights = parse_heights(&input)?;
        if !heights.is_empty() {
            debug!(count = heights.len(), "read heights from stdin");
            return Ok(vec![heights]);
        }
    }

    info!("no heights given, evaluating sample towers");
    Ok(SAMPLE_TOWERS.iter().map(|(tower, _)| tower.to_vec()).collect())
}

fn run(config: CliConfig) -> Result<()> {
    let evaluations = collect_towers(&config)?
        .into_iter()
        .map(|heights| Evaluation::new(heights, config.exhaustive))
        .collect::<Result<Vec<_>>>()?;
    print!("{}", render(&evaluations, config.format)?);
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tower_cost=info,tower_eval=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = CliConfig::from_env()
        .and_then(|config| config.parse_args(std::env::args().skip(1)));

    let result = match command {
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Ok(Command::Run(config)) => run(config),
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use crate::core::{CharacteristicId, ScenarioId};
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qmsim")]
#[command(about = "ISO 15939 measurement process simulator over the ISO 25010 quality model", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (skips discovery of .qmsim.toml)
    #[arg(long, global = true, env = "QMSIM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Plain output (ASCII only, no colors, no emoji)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Defaults to `wizard`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Run the interactive four-step wizard
    Wizard,

    /// Run the wizard non-interactively and print the analysis
    Report(ReportArgs),

    /// Show case studies and the metric library
    Catalog,

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct ReportArgs {
    /// Load a predefined case study
    #[arg(long, value_name = "iot|health|mobile")]
    pub scenario: Option<ScenarioId>,

    /// Toggle a characteristic (func, perf, comp, usab, rel, sec, maint, port)
    #[arg(long = "toggle", value_name = "ID")]
    pub toggles: Vec<CharacteristicId>,

    /// Weight input for a characteristic, e.g. `perf=40`
    #[arg(long = "weight", value_name = "ID=N", value_parser = parse_weight_arg)]
    pub weights: Vec<WeightArg>,

    /// Metric value input, e.g. `perf/m_perf_1=350`
    #[arg(long = "metric", value_name = "ID/METRIC=V", value_parser = parse_metric_arg)]
    pub metrics: Vec<MetricArg>,

    /// Output format (defaults to the configured format, else terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// `--weight ID=N`; the value stays raw so it is validated like typed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightArg {
    pub characteristic: CharacteristicId,
    pub raw: String,
}

/// `--metric ID/METRIC=V`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricArg {
    pub characteristic: CharacteristicId,
    pub metric: String,
    pub raw: String,
}

pub fn parse_weight_arg(s: &str) -> Result<WeightArg, String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=N, got '{}'", s))?;
    Ok(WeightArg {
        characteristic: key.parse()?,
        raw: raw.to_string(),
    })
}

pub fn parse_metric_arg(s: &str) -> Result<MetricArg, String> {
    let (target, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID/METRIC=VALUE, got '{}'", s))?;
    let (key, metric) = target
        .split_once('/')
        .ok_or_else(|| format!("expected ID/METRIC=VALUE, got '{}'", s))?;
    if metric.trim().is_empty() {
        return Err(format!("missing metric id in '{}'", s));
    }
    Ok(MetricArg {
        characteristic: key.parse()?,
        metric: metric.trim().to_string(),
        raw: raw.to_string(),
    })
}

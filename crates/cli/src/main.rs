//! # netpulse-cli
//!
//! Command-line runner for the network metrics and community sentiment
//! reports. Defaults come from `NETPULSE_*` environment variables; flags
//! override them.

use clap::{Args, Parser, Subcommand};
use pipeline_facade::prelude::*;
use pipeline_facade::{Source, Topic};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "netpulse")]
#[command(about = "Synthetic network health and sentiment reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate metrics, flag anomalies and forecast block time
    Metrics {
        #[command(flatten)]
        run: RunArgs,

        /// Hourly samples in the window
        #[arg(short, long)]
        window: Option<usize>,

        /// Forecast steps
        #[arg(long)]
        horizon: Option<usize>,

        /// Fraction of samples flagged as anomalous
        #[arg(short, long)]
        contamination: Option<f64>,

        /// Isolation trees
        #[arg(long)]
        estimators: Option<usize>,

        /// Block time alert ceiling in seconds
        #[arg(long)]
        block_time_ceiling: Option<f64>,

        /// Validator uptime alert floor in percent
        #[arg(long)]
        uptime_floor: Option<f64>,

        /// Samples averaged for the uptime alert
        #[arg(long)]
        uptime_tail: Option<usize>,
    },

    /// Score community posts and aggregate sentiment
    Sentiment {
        #[command(flatten)]
        run: RunArgs,

        /// Calendar length in days
        #[arg(short, long)]
        days: Option<usize>,

        /// Keep posts from this source (repeatable: x, github, forum)
        #[arg(long = "source", value_parser = parse_source)]
        sources: Vec<Source>,

        /// Keep posts on this topic (repeatable)
        #[arg(long = "topic", value_parser = parse_topic)]
        topics: Vec<Topic>,

        /// Mean sentiment alert floor
        #[arg(long)]
        sentiment_floor: Option<f64>,
    },
}

/// Flags shared by both reports.
#[derive(Args)]
struct RunArgs {
    /// Random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pretty-print the JSON report
    #[arg(short, long)]
    pretty: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_source(value: &str) -> CliResult<Source> {
    value.parse::<Source>().map_err(|e| e.to_string())
}

fn parse_topic(value: &str) -> CliResult<Topic> {
    value.parse::<Topic>().map_err(|e| e.to_string())
}

fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl Commands {
    fn run_args(&self) -> &RunArgs {
        match self {
            Commands::Metrics { run, .. } | Commands::Sentiment { run, .. } => run,
        }
    }

    /// Apply the flags on top of `config` and validate the result.
    fn configure(&self, mut config: PipelineConfig) -> CliResult<PipelineConfig> {
        set(&mut config.seed, self.run_args().seed);
        match self {
            Commands::Metrics {
                window,
                horizon,
                contamination,
                estimators,
                block_time_ceiling,
                uptime_floor,
                uptime_tail,
                ..
            } => {
                set(&mut config.window, *window);
                set(&mut config.horizon, *horizon);
                set(&mut config.contamination, *contamination);
                set(&mut config.n_estimators, *estimators);
                set(&mut config.thresholds.block_time_ceiling, *block_time_ceiling);
                set(&mut config.thresholds.uptime_floor, *uptime_floor);
                set(&mut config.thresholds.uptime_tail, *uptime_tail);
            }
            Commands::Sentiment {
                days,
                sources,
                topics,
                sentiment_floor,
                ..
            } => {
                set(&mut config.sentiment_days, *days);
                set(&mut config.thresholds.sentiment_floor, *sentiment_floor);
                if !sources.is_empty() {
                    config.filter = config.filter.with_sources(sources.iter().copied());
                }
                if !topics.is_empty() {
                    config.filter = config.filter.with_topics(topics.iter().copied());
                }
            }
        }
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

fn write_report<T: Serialize>(report: &T, args: &RunArgs) -> CliResult<()> {
    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).map_err(|e| format!("Failed to create {:?}: {}", path, e))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    if args.pretty {
        serde_json::to_writer_pretty(&mut writer, report)
    } else {
        serde_json::to_writer(&mut writer, report)
    }
    .map_err(|e| format!("Failed to write JSON: {}", e))?;
    writeln!(writer).map_err(|e| format!("Failed to write JSON: {}", e))?;
    writer
        .flush()
        .map_err(|e| format!("Failed to write JSON: {}", e))?;

    if let Some(path) = &args.output {
        tracing::info!(path = ?path, "report written");
    }
    Ok(())
}

fn run(command: Commands) -> CliResult<()> {
    let defaults = PipelineConfig::from_env().map_err(|e| e.to_string())?;
    let config = command.configure(defaults)?;
    let args = command.run_args();

    match &command {
        Commands::Metrics { .. } => {
            let report = MetricsPipeline::new(config)
                .and_then(|p| p.run())
                .map_err(|e| format!("{}: {}", e.kind(), e))?;
            write_report(&report, args)
        }
        Commands::Sentiment { .. } => {
            let report = SentimentPipeline::new(config)
                .and_then(|p| p.run())
                .map_err(|e| format!("{}: {}", e.kind(), e))?;
            write_report(&report, args)
        }
    }
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,netpulse=info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Commands {
        let mut argv = vec!["netpulse"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_metrics_flags_override_defaults() {
        let command = parse(&[
            "metrics",
            "--seed",
            "7",
            "--window",
            "240",
            "--horizon",
            "12",
            "--uptime-floor",
            "97",
            "--pretty",
        ]);
        let config = command.configure(PipelineConfig::default()).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.window, 240);
        assert_eq!(config.horizon, 12);
        assert_eq!(config.thresholds.uptime_floor, 97.0);
        assert_eq!(config.contamination, 0.05);
        assert!(command.run_args().pretty);
    }

    #[test]
    fn test_sentiment_filter_flags() {
        let command = parse(&[
            "sentiment",
            "--source",
            "x",
            "--source",
            "GitHub",
            "--topic",
            "staking",
        ]);
        let config = command.configure(PipelineConfig::default()).unwrap();
        let sources = config.filter.sources.unwrap();
        assert_eq!(sources.len(), 2);
        assert!(sources.contains(&Source::GitHub));
        assert_eq!(config.filter.topics.unwrap().len(), 1);
    }

    #[test]
    fn test_no_filter_flags_keep_identity() {
        let config = parse(&["sentiment"])
            .configure(PipelineConfig::default())
            .unwrap();
        assert!(config.filter.is_identity());
    }

    #[test]
    fn test_unknown_topic_rejected() {
        assert!(Cli::try_parse_from(["netpulse", "sentiment", "--topic", "nfts"]).is_err());
    }

    #[test]
    fn test_invalid_override_rejected() {
        let error = parse(&["metrics", "--horizon", "0"])
            .configure(PipelineConfig::default())
            .unwrap_err();
        assert!(error.contains("horizon"));
    }

    #[test]
    fn test_report_written_to_file() {
        let path =
            std::env::temp_dir().join(format!("netpulse-cli-{}.json", std::process::id()));
        let args = RunArgs {
            seed: None,
            pretty: true,
            output: Some(path.clone()),
        };
        let report = serde_json::json!({"alerts": []});
        write_report(&report, &args).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, report);
        std::fs::remove_file(path).unwrap();
    }
}

use bpreport_core::cli::{self, AGGREGATE_USAGE, ReportCmd};
use bpreport_core::conf::load_or_default;
use bpreport_core::logging::{default_log_format, init_logging};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "bpreport",
    version,
    about = "bpreport: branch predictor benchmark results from simulator logs"
)]
struct Cli {
    /// Path to a bpreport TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: ReportCmd,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if matches!(&cli.command, ReportCmd::Aggregate { logs } if logs.is_empty()) {
        eprintln!("{AGGREGATE_USAGE}");
        return ExitCode::FAILURE;
    }

    init_logging(default_log_format());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            if let Some(hint) = cli::error_hint(&err) {
                eprintln!();
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = load_or_default(cli.config.as_deref())?;
    tracing::debug!(?cfg, "configuration loaded");

    match cli.command {
        ReportCmd::Aggregate { logs } => cli::aggregate(&logs, &cfg).map(|_| ()),
        ReportCmd::Plot => cli::plot(&cfg).map(|_| ()),
        ReportCmd::Summary { json } => cli::summary(&cfg, json),
    }
}

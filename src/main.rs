use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::control::set_override as set_color_override;
use colored::Colorize;
use prompt_report::engine::{run_fixtures, RunOutput, SimulatedEvaluator};
use prompt_report::fixtures::{FixtureSet, DEFAULT_FIXTURE_PATH};
use prompt_report::report::{print_console, run_timestamp, Report};
use prompt_report::rules::RuleEvaluator;
use std::path::{Path, PathBuf};
use tracing::error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum EvaluatorOpt {
    /// Triviality check: prompt must be a non-blank string
    Simulated,
    /// NG-keyword and PII-pattern checks per category expectation
    Rules,
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Runs prompt fixture checks and writes a timestamped integration test report"
)]
struct Cli {
    /// YAML fixture file with the four prompt categories
    #[arg(value_name = "FIXTURES", default_value = DEFAULT_FIXTURE_PATH)]
    fixtures: PathBuf,

    /// How each prompt is classified
    #[arg(long, value_enum, default_value = "simulated")]
    evaluator: EvaluatorOpt,

    /// Directory the report file is written into
    #[arg(long, value_name = "DIR", default_value = ".")]
    report_dir: PathBuf,

    /// Skip the per-prompt console listing
    #[arg(short = 'q', long = "silent")]
    silent: bool,

    /// More console detail
    #[arg(short, long)]
    verbose: bool,

    #[arg(long = "no-color")]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "prompt_report=info".to_string())
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "prompt_report=warn".to_string())
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    set_color_override(!cli.no_color);

    // One timestamp for the whole run: header and file name must agree.
    let mut report = Report::new(run_timestamp());

    let fixtures = match FixtureSet::load(&cli.fixtures) {
        Ok(fixtures) => fixtures,
        Err(err) => {
            // Reported outcome, not a crash: minimal report, exit zero.
            println!("{}", err.to_string().red());
            report.push_line(err.to_string());
            write_report(&report, &cli.report_dir);
            return Ok(());
        }
    };

    let RunOutput { summary, warnings } = match cli.evaluator {
        EvaluatorOpt::Simulated => run_fixtures(&fixtures, &SimulatedEvaluator),
        EvaluatorOpt::Rules => run_fixtures(&fixtures, &RuleEvaluator::new()?),
    };

    for warning in warnings {
        report.push_line(warning);
    }
    report.push_summary(&summary);

    if !cli.silent {
        print_console(&summary);
    }
    write_report(&report, &cli.report_dir);
    Ok(())
}

fn write_report(report: &Report, dir: &Path) {
    match report.write_to(dir) {
        Ok(path) => println!("Report generated: {}", path.display()),
        Err(err) => error!("ERROR: Could not write report file: {err}"),
    }
}

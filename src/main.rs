mod adapters;
mod application;
mod cli;
mod compliance;
mod config;
mod ports;
mod shared;

use std::path::{Path, PathBuf};
use std::process;

use owo_colors::OwoColorize;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::demo::DemoAnalyzer;
use adapters::outbound::filesystem::{FileSystemPreferenceStore, FileSystemWriter, StdoutPresenter};
use adapters::outbound::network::{CachingAnalyzer, HttpAnalyzer};
use adapters::outbound::runtime::TokioScheduler;
use application::dto::{AnalysisRequest, AnalysisResponse, OutputFormat};
use application::factories::FormatterFactory;
use application::use_cases::{RunAnalysisUseCase, Submission};
use application::Session;
use cli::Args;
use compliance::domain::{CheckCategory, CheckSelection, Score};
use compliance::services::RiskAggregator;
use ports::outbound::{Analyzer, OutputPresenter};
use shared::error::{ComplyError, ExitCode};
use shared::Result;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            let code = e
                .downcast_ref::<ComplyError>()
                .map(ComplyError::exit_code)
                .unwrap_or(ExitCode::ApplicationError);
            process::exit(code.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    // Load configuration (explicit path, or auto-discovered in the cwd)
    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(Path::new("."))?,
    };
    let config = config.unwrap_or_default();

    // CLI flags take precedence over config file values
    let format = match args.format {
        Some(format) => format,
        None => match config.format.as_deref() {
            Some(value) => value
                .parse::<OutputFormat>()
                .map_err(|e| anyhow::anyhow!(e))?,
            None => OutputFormat::Json,
        },
    };

    let selection = if !args.checks.is_empty() {
        CheckSelection::from_categories(args.checks.iter().copied())
    } else if let Some(ref checks) = config.checks {
        let categories = checks
            .iter()
            .map(|check| check.parse::<CheckCategory>())
            .collect::<std::result::Result<Vec<_>, String>>()
            .map_err(|e| anyhow::anyhow!(e))?;
        CheckSelection::from_categories(categories)
    } else {
        CheckSelection::defaults()
    };

    let fail_under = match args.fail_under.or(config.fail_under) {
        Some(value) => Some(Score::new(value)?),
        None => None,
    };

    let endpoint = args.endpoint.clone().or(config.endpoint);

    // Session context with persisted preferences
    let preference_store = FileSystemPreferenceStore::new(preferences_path());
    let mut session = Session::initialize(&preference_store);
    if let Some(dark_mode) = args.dark_mode {
        if dark_mode != session.dark_mode() {
            if let Err(e) = session.toggle_dark_mode(&preference_store) {
                eprintln!("⚠️  Warning: failed to persist preference: {}", e);
            }
        }
    }
    session.set_risk_filter(args.risks);

    let mut request = AnalysisRequest::new(args.url.clone(), selection);
    if let Some(threshold) = fail_under {
        request = request.with_fail_under(threshold);
    }

    // Run the analysis with the configured analyzer (remote or built-in)
    let submission = match endpoint {
        Some(url) => {
            let analyzer = CachingAnalyzer::new(HttpAnalyzer::new(url)?);
            run_analysis(analyzer, &mut session, request).await?
        }
        None => {
            let analyzer = CachingAnalyzer::new(DemoAnalyzer::new());
            run_analysis(analyzer, &mut session, request).await?
        }
    };

    let Submission::Completed(response) = submission else {
        // A fresh CLI session has no concurrent run to collide with.
        return Ok(ExitCode::Success);
    };

    // Render the report
    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatter = FormatterFactory::create(format, session.risk_filter());
    let formatted_output = formatter.format(&response.result)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };
    presenter.present(&formatted_output)?;

    print_summary(&response);

    if response.below_fail_threshold {
        Ok(ExitCode::NonCompliant)
    } else {
        Ok(ExitCode::Success)
    }
}

async fn run_analysis<A: Analyzer>(
    analyzer: A,
    session: &mut Session,
    request: AnalysisRequest,
) -> Result<Submission> {
    let use_case = RunAnalysisUseCase::new(
        analyzer,
        TokioScheduler::new(),
        StderrProgressReporter::new(),
    );
    use_case.execute(session.lifecycle_mut(), request).await
}

/// Where the session preferences live. Overridable through the
/// COMPLY_SCAN_PREFS environment variable (used by tests).
fn preferences_path() -> PathBuf {
    std::env::var_os("COMPLY_SCAN_PREFS")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".comply-scan")
                .join("preferences.json")
        })
}

/// Prints the colored score summary to stderr.
fn print_summary(response: &AnalysisResponse) {
    let score = response.result.overall_score();
    let tier = score.tier();
    let counts = RiskAggregator::counts(response.result.risks());
    eprintln!(
        "\n{} Score global : {} — {}",
        tier.emoji(),
        format!("{}/100", score).color(tier.color()).bold(),
        tier.label().color(tier.color())
    );
    eprintln!(
        "   Risques : {} critiques · {} moyens · {} faibles",
        counts.critical, counts.medium, counts.low
    );
    if response.below_fail_threshold {
        eprintln!("   Seuil de conformité non atteint");
    }
}

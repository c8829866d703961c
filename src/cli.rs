use clap::Parser;

use crate::application::dto::OutputFormat;
use crate::compliance::domain::CheckCategory;
use crate::compliance::services::RiskFilter;

/// Assess the RGPD / AI Act compliance of a GitHub repository
#[derive(Parser, Debug)]
#[command(name = "comply-scan")]
#[command(version)]
#[command(about = "Assess the RGPD / AI Act compliance of a GitHub repository", long_about = None)]
pub struct Args {
    /// GitHub repository URL (e.g. https://github.com/org/repo)
    pub url: String,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Check category to run (rgpd, aiact, pii, thirdparty, legal, security).
    /// Can be specified multiple times: -c rgpd -c pii. Defaults to the
    /// recommended set.
    #[arg(short = 'c', long = "check", value_name = "CATEGORY")]
    pub checks: Vec<CheckCategory>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Exit with code 1 when the overall score is below this threshold (0-100)
    #[arg(long, value_name = "SCORE")]
    pub fail_under: Option<u8>,

    /// Restrict the report's risk section to one level (all, critical, medium, low)
    #[arg(long, value_name = "LEVEL", default_value = "all")]
    pub risks: RiskFilter,

    /// Remote analyzer endpoint; the built-in demo analyzer is used if omitted
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Config file path (defaults to ./comply-scan.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Persist the dark mode preference for future sessions
    #[arg(long, value_name = "BOOL")]
    pub dark_mode: Option<bool>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};

use crate::compliance::domain::Score;

/// Scores below this bound are non-compliant.
const ELEVATED_FLOOR: u8 = 50;
/// Scores below this bound require attention.
const MODERATE_FLOOR: u8 = 70;
/// Scores below this bound are only partially compliant.
const SUCCESS_FLOOR: u8 = 85;

/// Classification policy mapping a score to its severity tier.
///
/// The same thresholds apply to the overall score, every category
/// sub-score and every breakdown entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceTier {
    Critical,
    Elevated,
    Moderate,
    Success,
}

impl ComplianceTier {
    /// Classifies a score against the fixed thresholds.
    pub fn for_score(score: Score) -> Self {
        match score.value() {
            value if value < ELEVATED_FLOOR => ComplianceTier::Critical,
            value if value < MODERATE_FLOOR => ComplianceTier::Elevated,
            value if value < SUCCESS_FLOOR => ComplianceTier::Moderate,
            _ => ComplianceTier::Success,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComplianceTier::Critical => "Non conforme",
            ComplianceTier::Elevated => "Attention requise",
            ComplianceTier::Moderate => "Partiellement conforme",
            ComplianceTier::Success => "Conforme",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            ComplianceTier::Critical => "🔴",
            ComplianceTier::Elevated => "🟠",
            ComplianceTier::Moderate => "🟡",
            ComplianceTier::Success => "🟢",
        }
    }

    pub fn color(self) -> AnsiColors {
        match self {
            ComplianceTier::Critical => AnsiColors::Red,
            ComplianceTier::Elevated => AnsiColors::BrightRed,
            ComplianceTier::Moderate => AnsiColors::Yellow,
            ComplianceTier::Success => AnsiColors::Green,
        }
    }
}

impl std::fmt::Display for ComplianceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

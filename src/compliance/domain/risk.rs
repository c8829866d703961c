use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};

/// Severity of a detected compliance risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Critical,
    Medium,
    Low,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Critical, RiskLevel::Medium, RiskLevel::Low];

    pub fn id(self) -> &'static str {
        match self {
            RiskLevel::Critical => "critical",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }

    /// Badge text shown next to a risk of this level.
    pub fn badge_label(self) -> &'static str {
        match self {
            RiskLevel::Critical => "Critique",
            RiskLevel::Medium => "Moyen",
            RiskLevel::Low => "Faible",
        }
    }

    pub fn badge_emoji(self) -> &'static str {
        match self {
            RiskLevel::Critical => "🔴",
            RiskLevel::Medium => "🟡",
            RiskLevel::Low => "🟢",
        }
    }

    pub fn color(self) -> AnsiColors {
        match self {
            RiskLevel::Critical => AnsiColors::Red,
            RiskLevel::Medium => AnsiColors::Yellow,
            RiskLevel::Low => AnsiColors::Green,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(RiskLevel::Critical),
            "medium" => Ok(RiskLevel::Medium),
            "low" => Ok(RiskLevel::Low),
            _ => Err(format!(
                "Unknown risk level: {}. Valid levels are critical, medium, low",
                s
            )),
        }
    }
}

/// Remediation urgency tier attached to risks and actions.
///
/// Assigned by the analyzer independently of `RiskLevel`; the engine
/// preserves both as-is and never derives one from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    P0,
    P1,
    P2,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::P0 => "P0",
            Priority::P1 => "P1",
            Priority::P2 => "P2",
        }
    }

    /// Human-readable urgency for this priority tier.
    pub fn urgency(self) -> &'static str {
        match self {
            Priority::P0 => "Immédiate",
            Priority::P1 => "Cette semaine",
            Priority::P2 => "Ce mois",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "P0" => Ok(Priority::P0),
            "P1" => Ok(Priority::P1),
            "P2" => Ok(Priority::P2),
            _ => Err(format!(
                "Unknown priority: {}. Valid priorities are P0, P1, P2",
                s
            )),
        }
    }
}

/// Where a risk was detected in the analyzed repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl SourceLocation {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line: None,
        }
    }

    pub fn with_line(path: impl Into<String>, line: u32) -> Self {
        Self {
            path: path.into(),
            line: Some(line),
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.path, line),
            None => write!(f, "{}", self.path),
        }
    }
}

/// A classified compliance risk produced by the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    /// Unique within a result; uniqueness is enforced by the result builder.
    pub id: String,
    pub level: RiskLevel,
    pub title: String,
    pub description: String,
    pub source: SourceLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_reference: Option<String>,
    pub priority: Priority,
}

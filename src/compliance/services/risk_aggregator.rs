use crate::compliance::domain::{Risk, RiskLevel};

/// Number of risks per severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RiskCounts {
    pub critical: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskCounts {
    pub fn total(&self) -> usize {
        self.critical + self.medium + self.low
    }

    pub fn for_level(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Critical => self.critical,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }
}

/// Which risks the report view currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskFilter {
    All,
    Level(RiskLevel),
}

impl RiskFilter {
    pub fn matches(&self, risk: &Risk) -> bool {
        match self {
            RiskFilter::All => true,
            RiskFilter::Level(level) => risk.level == *level,
        }
    }
}

impl std::fmt::Display for RiskFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskFilter::All => write!(f, "all"),
            RiskFilter::Level(level) => write!(f, "{}", level),
        }
    }
}

impl std::str::FromStr for RiskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(RiskFilter::All);
        }
        s.parse::<RiskLevel>()
            .map(RiskFilter::Level)
            .map_err(|_| {
                format!(
                    "Unknown risk filter: {}. Valid filters are all, critical, medium, low",
                    s
                )
            })
    }
}

/// Read-only derived views over a result's risk list.
///
/// The aggregator never mutates or re-orders the underlying sequence; it
/// only counts and selects.
pub struct RiskAggregator;

impl RiskAggregator {
    /// Counts risks per severity level.
    pub fn counts(risks: &[Risk]) -> RiskCounts {
        let mut counts = RiskCounts::default();
        for risk in risks {
            match risk.level {
                RiskLevel::Critical => counts.critical += 1,
                RiskLevel::Medium => counts.medium += 1,
                RiskLevel::Low => counts.low += 1,
            }
        }
        counts
    }

    /// Selects the risks matching the filter, preserving original relative
    /// order.
    pub fn filter<'a>(risks: &'a [Risk], filter: RiskFilter) -> Vec<&'a Risk> {
        risks.iter().filter(|risk| filter.matches(risk)).collect()
    }
}

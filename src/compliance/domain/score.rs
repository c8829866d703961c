use serde::{Deserialize, Serialize};

use crate::compliance::policies::ComplianceTier;
use crate::shared::Result;

/// Upper bound of the scoring scale.
pub const MAX_SCORE: u8 = 100;

/// NewType wrapper for a compliance score on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub fn new(value: u8) -> Result<Self> {
        if value > MAX_SCORE {
            anyhow::bail!(
                "Score out of range: {}. Scores must be between 0 and {}",
                value,
                MAX_SCORE
            );
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Classifies this score against the fixed compliance thresholds.
    pub fn tier(self) -> ComplianceTier {
        ComplianceTier::for_score(self)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Score {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// One score per fixed assessment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub rgpd: Score,
    pub ai_act: Score,
    pub security: Score,
    pub documentation: Score,
}

impl CategoryScores {
    /// Display label and score for each category, in presentation order.
    pub fn entries(&self) -> [(&'static str, Score); 4] {
        [
            ("RGPD", self.rgpd),
            ("AI Act", self.ai_act),
            ("Sécurité", self.security),
            ("Documentation", self.documentation),
        ]
    }
}

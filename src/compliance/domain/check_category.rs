use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// The closed set of analysis categories a user can request.
///
/// Identifiers are stable strings used on the CLI, in config files and on
/// the analyzer wire format; they are not display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CheckCategory {
    #[serde(rename = "rgpd")]
    Rgpd,
    #[serde(rename = "aiact")]
    AiAct,
    #[serde(rename = "pii")]
    Pii,
    #[serde(rename = "thirdparty")]
    ThirdPartyFlows,
    #[serde(rename = "legal")]
    LegalDocs,
    #[serde(rename = "security")]
    Security,
}

impl CheckCategory {
    /// All categories, in canonical order.
    pub const ALL: [CheckCategory; 6] = [
        CheckCategory::Rgpd,
        CheckCategory::AiAct,
        CheckCategory::Pii,
        CheckCategory::ThirdPartyFlows,
        CheckCategory::LegalDocs,
        CheckCategory::Security,
    ];

    /// Stable identifier for this category.
    pub fn id(self) -> &'static str {
        match self {
            CheckCategory::Rgpd => "rgpd",
            CheckCategory::AiAct => "aiact",
            CheckCategory::Pii => "pii",
            CheckCategory::ThirdPartyFlows => "thirdparty",
            CheckCategory::LegalDocs => "legal",
            CheckCategory::Security => "security",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CheckCategory::Rgpd => "RGPD Compliance",
            CheckCategory::AiAct => "AI Act Compliance",
            CheckCategory::Pii => "Détection PII",
            CheckCategory::ThirdPartyFlows => "Flux données tiers",
            CheckCategory::LegalDocs => "Documentation légale",
            CheckCategory::Security => "Audit sécurité",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CheckCategory::Rgpd => "Conformité RGPD complète",
            CheckCategory::AiAct => "Règlement européen IA",
            CheckCategory::Pii => "Emails, IPs, données sensibles",
            CheckCategory::ThirdPartyFlows => "OpenAI, Stripe, Firebase...",
            CheckCategory::LegalDocs => "Privacy Policy, CGU, DPA",
            CheckCategory::Security => "Secrets hardcodés, vulnérabilités",
        }
    }

    /// Whether the product marks this category as recommended.
    pub fn recommended(self) -> bool {
        !matches!(self, CheckCategory::Security)
    }

    /// Whether this category is selected when the user has made no choice.
    pub fn default_selected(self) -> bool {
        !matches!(self, CheckCategory::Security)
    }
}

impl std::fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for CheckCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rgpd" => Ok(CheckCategory::Rgpd),
            "aiact" => Ok(CheckCategory::AiAct),
            "pii" => Ok(CheckCategory::Pii),
            "thirdparty" => Ok(CheckCategory::ThirdPartyFlows),
            "legal" => Ok(CheckCategory::LegalDocs),
            "security" => Ok(CheckCategory::Security),
            _ => Err(format!(
                "Unknown check category: {}. Valid categories are rgpd, aiact, pii, thirdparty, legal, security",
                s
            )),
        }
    }
}

/// Tracks which analysis categories are requested.
///
/// Every category always has an entry; `toggle` flips exactly one of them.
/// Submission requires at least one selected category, which callers check
/// through `has_any_selected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSelection {
    selected: BTreeMap<CheckCategory, bool>,
}

impl CheckSelection {
    /// Selection with each category in its product default state.
    pub fn defaults() -> Self {
        Self {
            selected: CheckCategory::ALL
                .iter()
                .map(|&category| (category, category.default_selected()))
                .collect(),
        }
    }

    /// Selection with every category off.
    pub fn none() -> Self {
        Self {
            selected: CheckCategory::ALL
                .iter()
                .map(|&category| (category, false))
                .collect(),
        }
    }

    /// Selection with exactly the given categories on.
    pub fn from_categories<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = CheckCategory>,
    {
        let mut selection = Self::none();
        for category in categories {
            selection.selected.insert(category, true);
        }
        selection
    }

    /// Flips exactly this category, leaving all others untouched.
    pub fn toggle(&mut self, category: CheckCategory) {
        let entry = self.selected.entry(category).or_insert(false);
        *entry = !*entry;
    }

    pub fn is_selected(&self, category: CheckCategory) -> bool {
        self.selected.get(&category).copied().unwrap_or(false)
    }

    /// True iff any category is selected.
    pub fn has_any_selected(&self) -> bool {
        self.selected.values().any(|&selected| selected)
    }

    /// The selected categories, in canonical order.
    pub fn selected_categories(&self) -> BTreeSet<CheckCategory> {
        self.selected
            .iter()
            .filter(|(_, &selected)| selected)
            .map(|(&category, _)| category)
            .collect()
    }
}

impl Default for CheckSelection {
    fn default() -> Self {
        Self::defaults()
    }
}

use std::collections::BTreeSet;

use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};

/// Compliance status of a third-party data flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceStatus {
    Compliant,
    Warning,
    NonCompliant,
}

impl ServiceStatus {
    pub fn id(self) -> &'static str {
        match self {
            ServiceStatus::Compliant => "compliant",
            ServiceStatus::Warning => "warning",
            ServiceStatus::NonCompliant => "non-compliant",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceStatus::Compliant => "Conforme",
            ServiceStatus::Warning => "À vérifier",
            ServiceStatus::NonCompliant => "Non conforme",
        }
    }

    pub fn color(self) -> AnsiColors {
        match self {
            ServiceStatus::Compliant => AnsiColors::Green,
            ServiceStatus::Warning => AnsiColors::Yellow,
            ServiceStatus::NonCompliant => AnsiColors::Red,
        }
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A third-party service receiving data from the analyzed application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceFlow {
    pub service_name: String,
    pub data_categories_shared: BTreeSet<String>,
    pub hosting_location: String,
    pub is_within_jurisdiction: bool,
    pub status: ServiceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_are_exhaustive() {
        assert_eq!(ServiceStatus::Compliant.label(), "Conforme");
        assert_eq!(ServiceStatus::Warning.label(), "À vérifier");
        assert_eq!(ServiceStatus::NonCompliant.label(), "Non conforme");
    }

    #[test]
    fn test_status_serde_ids() {
        assert_eq!(
            serde_json::to_string(&ServiceStatus::NonCompliant).unwrap(),
            "\"non-compliant\""
        );
        let back: ServiceStatus = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(back, ServiceStatus::Warning);
    }

    #[test]
    fn test_data_categories_are_deduplicated_and_ordered() {
        let flow = ServiceFlow {
            service_name: "OpenAI".to_string(),
            data_categories_shared: ["prompts", "emails", "emails"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            hosting_location: "USA".to_string(),
            is_within_jurisdiction: false,
            status: ServiceStatus::Warning,
        };
        let categories: Vec<&str> = flow
            .data_categories_shared
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(categories, vec!["emails", "prompts"]);
    }
}

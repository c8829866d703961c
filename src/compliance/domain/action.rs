use serde::{Deserialize, Serialize};

use crate::compliance::domain::Priority;

/// The kind of remediation work an action represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Technical,
    Legal,
    Organizational,
}

impl ActionType {
    pub fn id(self) -> &'static str {
        match self {
            ActionType::Technical => "technical",
            ActionType::Legal => "legal",
            ActionType::Organizational => "organizational",
        }
    }

    /// Badge text shown next to an action of this type.
    pub fn badge(self) -> &'static str {
        match self {
            ActionType::Technical => "🔧 Technique",
            ActionType::Legal => "📝 Légal",
            ActionType::Organizational => "🔄 Organisationnel",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// One entry of the remediation plan.
///
/// Plan order is the order in which the analyzer emitted the actions; the
/// engine presents the sequence as-is and never re-sorts it by priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Unique within a result; uniqueness is enforced by the result builder.
    pub id: String,
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation_snippet: Option<String>,
    pub estimated_effort: String,
    pub priority: Priority,
}

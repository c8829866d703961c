use serde::{Deserialize, Serialize};

use crate::shared::error::ComplyError;

/// Maximum length for a repository reference (security limit)
const MAX_REFERENCE_LENGTH: usize = 512;

/// A syntactically validated GitHub repository locator.
///
/// Accepted grammar: optional `http`/`https` scheme, optional `www.`
/// subdomain, host `github.com`, then exactly `/{owner}/{repo}` with an
/// optional trailing slash. Validation is purely syntactic; no network
/// existence check is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepositoryReference {
    raw: String,
    owner: String,
    repo: String,
}

impl RepositoryReference {
    /// Parses and validates a user-supplied repository reference.
    ///
    /// # Errors
    /// Returns `ComplyError::InvalidRepositoryReference` when the input does
    /// not match the accepted grammar.
    pub fn parse(input: &str) -> Result<Self, ComplyError> {
        let invalid = || ComplyError::InvalidRepositoryReference {
            input: input.to_string(),
        };

        if input.is_empty() || input.len() > MAX_REFERENCE_LENGTH {
            return Err(invalid());
        }

        let rest = input
            .strip_prefix("https://")
            .or_else(|| input.strip_prefix("http://"))
            .unwrap_or(input);
        let rest = rest.strip_prefix("www.").unwrap_or(rest);
        let rest = rest.strip_prefix("github.com/").ok_or_else(invalid)?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let (owner, repo) = rest.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || !owner.chars().all(Self::is_owner_char) {
            return Err(invalid());
        }
        if repo.is_empty() || !repo.chars().all(Self::is_repo_char) {
            return Err(invalid());
        }

        Ok(Self {
            raw: input.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Pure, total validity check over arbitrary input. Never panics.
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// The reference exactly as submitted by the user.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Short display name in `owner/repo` form.
    pub fn repo_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    fn is_owner_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '-'
    }

    fn is_repo_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'
    }
}

impl std::fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl TryFrom<String> for RepositoryReference {
    type Error = ComplyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RepositoryReference> for String {
    fn from(reference: RepositoryReference) -> Self {
        reference.raw
    }
}

impl std::str::FromStr for RepositoryReference {
    type Err = ComplyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

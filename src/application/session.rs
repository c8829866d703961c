use crate::compliance::domain::{Action, AnalysisResult, Risk};
use crate::compliance::services::{
    AnalysisLifecycle, ExpansionState, RiskAggregator, RiskFilter,
};
use crate::ports::outbound::{Clipboard, PreferenceStore, DARK_MODE_KEY};
use crate::shared::Result;

/// Explicit, owned context for one user session.
///
/// Holds every piece of shared mutable state the assessment UI needs: the
/// lifecycle state machine, the report view state (filter + expansion) and
/// the persisted dark mode flag. There is exactly one writer, the session
/// owner, so no locking is involved.
#[derive(Debug)]
pub struct Session {
    lifecycle: AnalysisLifecycle,
    expansion: ExpansionState,
    risk_filter: RiskFilter,
    dark_mode: bool,
}

impl Session {
    /// Creates a session, reading the dark mode preference once.
    ///
    /// A missing or unreadable preference store falls back to the default
    /// (light mode) rather than failing the session.
    pub fn initialize(preferences: &impl PreferenceStore) -> Self {
        let dark_mode = preferences
            .load_bool(DARK_MODE_KEY)
            .unwrap_or(None)
            .unwrap_or(false);
        Self {
            lifecycle: AnalysisLifecycle::new(),
            expansion: ExpansionState::new(),
            risk_filter: RiskFilter::All,
            dark_mode,
        }
    }

    pub fn lifecycle(&self) -> &AnalysisLifecycle {
        &self.lifecycle
    }

    pub fn lifecycle_mut(&mut self) -> &mut AnalysisLifecycle {
        &mut self.lifecycle
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flips dark mode and writes the new value through the store.
    ///
    /// The in-memory flag flips even when the write fails; the error is
    /// returned so the caller can surface a warning.
    pub fn toggle_dark_mode(&mut self, preferences: &impl PreferenceStore) -> Result<bool> {
        self.dark_mode = !self.dark_mode;
        preferences.store_bool(DARK_MODE_KEY, self.dark_mode)?;
        Ok(self.dark_mode)
    }

    pub fn risk_filter(&self) -> RiskFilter {
        self.risk_filter
    }

    /// Changes which risks are visible. Expansion state is untouched.
    pub fn set_risk_filter(&mut self, filter: RiskFilter) {
        self.risk_filter = filter;
    }

    pub fn toggle_risk_expanded(&mut self, id: &str) {
        self.expansion.toggle(id);
    }

    pub fn is_risk_expanded(&self, id: &str) -> bool {
        self.expansion.is_expanded(id)
    }

    /// The risks currently visible under the active filter, in their
    /// original order.
    pub fn visible_risks<'a>(&self, result: &'a AnalysisResult) -> Vec<&'a Risk> {
        RiskAggregator::filter(result.risks(), self.risk_filter)
    }

    /// Copies an action's remediation snippet to the clipboard.
    ///
    /// Returns whether the "copied" acknowledgment should be shown; a
    /// missing snippet or a clipboard failure only suppresses it.
    pub fn copy_snippet(&self, clipboard: &impl Clipboard, action: &Action) -> bool {
        match &action.remediation_snippet {
            Some(snippet) => clipboard.copy(snippet).is_ok(),
            None => false,
        }
    }

    /// Discards the current result and view state, returning to `Idle`.
    ///
    /// The check selection is owned by the caller and is deliberately not
    /// reset here.
    pub fn start_new_analysis(&mut self) {
        self.lifecycle.reset();
        self.expansion.clear();
        self.risk_filter = RiskFilter::All;
    }
}

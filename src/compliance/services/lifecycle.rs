use std::time::Duration;

use crate::compliance::domain::AnalysisResult;

/// Progress advance per tick, in percentage points.
pub const PROGRESS_STEP: u8 = 5;
/// Progress value at which the run is ready to hand off to the analyzer.
pub const PROGRESS_COMPLETE: u8 = 100;
/// Progress width of each phase-message bucket.
pub const MESSAGE_BUCKET_WIDTH: u8 = 20;
/// Delay between two ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(150);
/// Pause between reaching 100% and handing off, so a progress bar can
/// finish rendering.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Fixed progress narrative shown while an analysis runs.
///
/// Purely cosmetic display copy: these are not real analyzer sub-phases and
/// carry no information about what the analyzer is actually doing.
pub const PHASE_MESSAGES: [&str; 5] = [
    "Clone du repository...",
    "Scan du code source...",
    "Analyse des dépendances...",
    "Détection IA en cours...",
    "Génération du rapport...",
];

/// Where a session currently stands in the analysis lifecycle.
#[derive(Debug, Clone)]
pub enum AnalysisPhase {
    Idle,
    Running { progress: u8 },
    Completed { result: AnalysisResult },
}

/// The analysis lifecycle state machine: Idle → Running → Completed.
///
/// The machine is advanced externally (by a scheduler-driven loop) through
/// `tick`, so it can be tested without real time passing. Each run is
/// identified by a generation token; completions carrying a stale token are
/// ignored, which makes cancellation safe when an analyzer response arrives
/// after the session has moved on.
#[derive(Debug)]
pub struct AnalysisLifecycle {
    phase: AnalysisPhase,
    generation: u64,
}

impl AnalysisLifecycle {
    pub fn new() -> Self {
        Self {
            phase: AnalysisPhase::Idle,
            generation: 0,
        }
    }

    pub fn phase(&self) -> &AnalysisPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Idle)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Running { .. })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Completed { .. })
    }

    /// The stored result, when the lifecycle is `Completed`.
    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            AnalysisPhase::Completed { result } => Some(result),
            _ => None,
        }
    }

    /// Current progress, when the lifecycle is `Running`.
    pub fn progress(&self) -> Option<u8> {
        match &self.phase {
            AnalysisPhase::Running { progress } => Some(*progress),
            _ => None,
        }
    }

    /// Starts a new run, returning its generation token.
    ///
    /// A no-op returning `None` while a run is already in progress
    /// (submissions are not queued). Starting from `Completed` discards the
    /// previous result.
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_running() {
            return None;
        }
        self.generation += 1;
        self.phase = AnalysisPhase::Running { progress: 0 };
        Some(self.generation)
    }

    /// Advances progress by one step, clamped at 100.
    ///
    /// Returns the new progress, or `None` when no run is in progress.
    pub fn tick(&mut self) -> Option<u8> {
        match &mut self.phase {
            AnalysisPhase::Running { progress } => {
                *progress = (*progress + PROGRESS_STEP).min(PROGRESS_COMPLETE);
                Some(*progress)
            }
            _ => None,
        }
    }

    /// The phase message matching the current progress.
    pub fn current_message(&self) -> Option<&'static str> {
        self.progress()
            .map(|progress| PHASE_MESSAGES[Self::message_index(progress)])
    }

    /// Maps progress into the fixed message list. Monotone non-decreasing
    /// in progress; the last message is reached before 100%.
    pub fn message_index(progress: u8) -> usize {
        ((progress / MESSAGE_BUCKET_WIDTH) as usize).min(PHASE_MESSAGES.len() - 1)
    }

    /// Stores the analyzer's result, finishing the run.
    ///
    /// Ignored (returns false) when the token is stale or no run is in
    /// progress: a late analyzer response must not resurrect a session that
    /// has moved on.
    pub fn complete(&mut self, token: u64, result: AnalysisResult) -> bool {
        if token != self.generation || !self.is_running() {
            return false;
        }
        self.phase = AnalysisPhase::Completed { result };
        true
    }

    /// Returns the run to `Idle` after an analyzer failure.
    ///
    /// Stale-guarded like `complete`. No partial result is ever surfaced.
    pub fn fail(&mut self, token: u64) -> bool {
        if token != self.generation || !self.is_running() {
            return false;
        }
        self.phase = AnalysisPhase::Idle;
        true
    }

    /// Cancels whatever is in progress and clears any stored result.
    ///
    /// Bumps the generation so outstanding completions for the previous run
    /// become no-ops.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = AnalysisPhase::Idle;
    }
}

impl Default for AnalysisLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

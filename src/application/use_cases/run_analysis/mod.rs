use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::compliance::domain::RepositoryReference;
use crate::compliance::services::lifecycle::{
    AnalysisLifecycle, PROGRESS_COMPLETE, SETTLE_DELAY, TICK_INTERVAL,
};
use crate::ports::outbound::{Analyzer, ProgressReporter, Scheduler};
use crate::shared::error::ComplyError;
use crate::shared::Result;

/// Outcome of a submission against the session lifecycle.
#[derive(Debug)]
pub enum Submission {
    /// The analysis ran to completion.
    Completed(AnalysisResponse),
    /// A run was already in progress; the submission was ignored.
    AlreadyRunning,
    /// The session was reset while the analyzer response was in flight;
    /// the late result was discarded.
    Superseded,
}

/// RunAnalysisUseCase - drives one analysis through its lifecycle
///
/// Validates the request, advances the lifecycle state machine tick by
/// tick on the injected scheduler, then hands off to the analyzer
/// collaborator and stores its result.
///
/// # Type Parameters
/// * `A` - Analyzer implementation
/// * `S` - Scheduler implementation
/// * `PR` - ProgressReporter implementation
pub struct RunAnalysisUseCase<A, S, PR> {
    analyzer: A,
    scheduler: S,
    progress_reporter: PR,
}

impl<A, S, PR> RunAnalysisUseCase<A, S, PR>
where
    A: Analyzer,
    S: Scheduler,
    PR: ProgressReporter,
{
    /// Creates a new RunAnalysisUseCase with injected dependencies
    pub fn new(analyzer: A, scheduler: S, progress_reporter: PR) -> Self {
        Self {
            analyzer,
            scheduler,
            progress_reporter,
        }
    }

    /// Executes one analysis against the given session lifecycle.
    ///
    /// # Arguments
    /// * `lifecycle` - The session's lifecycle state machine
    /// * `request` - Repository reference, check selection and threshold
    ///
    /// # Errors
    /// Fails without touching the lifecycle when the reference is invalid
    /// or no category is selected. Fails with the lifecycle back at `Idle`
    /// when the analyzer reports an error; the caller's input stays intact
    /// so the user can resubmit.
    pub async fn execute(
        &self,
        lifecycle: &mut AnalysisLifecycle,
        request: AnalysisRequest,
    ) -> Result<Submission> {
        let reference = RepositoryReference::parse(&request.repository_reference)?;
        if !request.selection.has_any_selected() {
            return Err(ComplyError::EmptyCheckSelection.into());
        }

        let Some(token) = lifecycle.begin() else {
            return Ok(Submission::AlreadyRunning);
        };

        self.progress_reporter
            .report(&format!("🔍 Analyzing {}", reference.repo_name()));

        self.drive_progress(lifecycle).await;

        // Let the progress display settle before handing off.
        self.scheduler.sleep(SETTLE_DELAY).await;

        let selected = request.selection.selected_categories();
        match self.analyzer.analyze(&reference, &selected).await {
            Ok(result) => {
                if !lifecycle.complete(token, result.clone()) {
                    return Ok(Submission::Superseded);
                }
                let below_threshold = request
                    .fail_under
                    .is_some_and(|threshold| result.overall_score() < threshold);
                let tier = result.overall_score().tier();
                self.progress_reporter.report_completion(&format!(
                    "✅ Analysis complete: score {}/100 — {} {}",
                    result.overall_score(),
                    tier.emoji(),
                    tier.label()
                ));
                Ok(Submission::Completed(AnalysisResponse::new(
                    result,
                    below_threshold,
                )))
            }
            Err(failure) => {
                lifecycle.fail(token);
                self.progress_reporter
                    .report_error(&format!("⚠️  Analyzer error: {}", failure));
                Err(ComplyError::AnalysisFailed {
                    reason: failure.reason,
                }
                .into())
            }
        }
    }

    /// Advances the lifecycle to 100%, reporting each tick.
    async fn drive_progress(&self, lifecycle: &mut AnalysisLifecycle) {
        loop {
            self.scheduler.sleep(TICK_INTERVAL).await;
            let Some(progress) = lifecycle.tick() else {
                break;
            };
            self.progress_reporter.report_progress(
                progress as usize,
                PROGRESS_COMPLETE as usize,
                lifecycle.current_message(),
            );
            if progress >= PROGRESS_COMPLETE {
                break;
            }
        }
    }
}

/// Domain services: lifecycle state machine and read-only aggregation.
pub mod expansion;
pub mod lifecycle;
pub mod risk_aggregator;

pub use expansion::ExpansionState;
pub use lifecycle::{
    AnalysisLifecycle, AnalysisPhase, MESSAGE_BUCKET_WIDTH, PHASE_MESSAGES, PROGRESS_COMPLETE,
    PROGRESS_STEP, SETTLE_DELAY, TICK_INTERVAL,
};
pub use risk_aggregator::{RiskAggregator, RiskCounts, RiskFilter};

/// Runtime adapters (timers).
pub mod scheduler;

pub use scheduler::TokioScheduler;

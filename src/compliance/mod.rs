/// Compliance assessment domain: value objects, classification policies
/// and the scoring/aggregation services.
pub mod domain;
pub mod policies;
pub mod services;

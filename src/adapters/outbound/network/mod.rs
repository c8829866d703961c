/// Network adapters for remote analyzer backends.
pub mod caching_analyzer;
pub mod http_analyzer;

pub use caching_analyzer::CachingAnalyzer;
pub use http_analyzer::HttpAnalyzer;

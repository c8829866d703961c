/// Built-in demonstration analyzer.
pub mod demo_analyzer;

pub use demo_analyzer::DemoAnalyzer;

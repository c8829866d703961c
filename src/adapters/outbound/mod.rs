/// Outbound adapters - concrete implementations of the outbound ports.
pub mod clipboard;
pub mod console;
pub mod demo;
pub mod filesystem;
pub mod formatters;
pub mod network;
pub mod runtime;

pub use clipboard::MemoryClipboard;

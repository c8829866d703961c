/// File system adapters.
pub mod file_writer;
pub mod preference_store;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use preference_store::FileSystemPreferenceStore;

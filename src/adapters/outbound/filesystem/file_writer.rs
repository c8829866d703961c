use std::path::PathBuf;

use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ComplyError;
use crate::shared::Result;

/// FileSystemWriter adapter that presents output by writing it to a file.
pub struct FileSystemWriter {
    path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        std::fs::write(&self.path, content).map_err(|e| ComplyError::FileWriteError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}

/// StdoutPresenter adapter that presents output on standard output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        println!("{}", content);
        Ok(())
    }
}

use crate::shared::Result;

/// Clipboard port used to copy remediation snippets.
///
/// A copy failure only suppresses the transient "copied" acknowledgment;
/// it must never take the session down.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

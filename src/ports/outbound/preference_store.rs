use crate::shared::Result;

/// Fixed key under which the dark mode preference is stored.
pub const DARK_MODE_KEY: &str = "dark_mode";

/// PreferenceStore port for persisted user preferences.
///
/// The session reads the dark mode flag once at startup and writes it back
/// on every toggle.
pub trait PreferenceStore {
    /// Loads a boolean preference; `None` when it has never been set.
    fn load_bool(&self, key: &str) -> Result<Option<bool>>;

    /// Persists a boolean preference.
    fn store_bool(&self, key: &str, value: bool) -> Result<()>;
}

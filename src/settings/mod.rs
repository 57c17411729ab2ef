//! User settings for sysdict.
//!
//! Settings live in a single JSON file under the user's config directory:
//! - `store`: SettingsStore for loading and persisting `Settings`

mod store;

pub use store::{Settings, SettingsError, SettingsStore, SETTINGS_FILE};

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cli;
pub mod services;
pub mod settings;
pub mod system_dict;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use services::{default_services, DictionaryInfo, DictionaryServices};
pub use settings::{Settings, SettingsError, SettingsStore};
pub use system_dict::{find_by_identifier, SystemDict, SystemDictKind};

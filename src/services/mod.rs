// System dictionary services - the safe surface over Dictionary Services
//
// Everything above this module is written against `DictionaryServices` so it
// can run against the live framework on macOS or a mock in tests.

#[cfg(target_os = "macos")]
mod ffi;
#[cfg(target_os = "macos")]
mod system;
#[cfg(not(target_os = "macos"))]
mod unsupported;

#[cfg(test)]
pub(crate) mod mock;

#[cfg(target_os = "macos")]
pub use system::{SystemDictionary, SystemDictionaryServices};
#[cfg(not(target_os = "macos"))]
pub use unsupported::{UnsupportedDictionary, UnsupportedDictionaryServices};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// Dictionary services for the current platform
#[cfg(target_os = "macos")]
pub type PlatformServices = SystemDictionaryServices;

/// Dictionary services for the current platform
#[cfg(not(target_os = "macos"))]
pub type PlatformServices = UnsupportedDictionaryServices;

/// Create the dictionary services backend for the current platform.
///
/// On macOS this talks to the CoreServices framework. Everywhere else the
/// framework does not exist and every query comes back empty.
pub fn default_services() -> PlatformServices {
    PlatformServices::new()
}

/// Snapshot of a dictionary's display metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryInfo {
    /// Human-readable name (e.g., "大辞林")
    pub name: Option<String>,
    /// Stable identifier (e.g., "com.apple.dictionary.ja.Daijirin")
    pub identifier: Option<String>,
}

/// Trait for dictionary service backends (allows mocking in tests)
pub trait DictionaryServices {
    /// Opaque handle to one installed dictionary
    type Dictionary: Clone + Eq + Hash;

    /// Dictionaries currently enabled in Dictionary.app. May be empty.
    fn active_dictionaries(&self) -> Vec<Self::Dictionary>;

    /// All installed dictionaries, enabled or not. May be empty.
    fn available_dictionaries(&self) -> HashSet<Self::Dictionary>;

    /// Human-readable name of a dictionary. `None` for an absent or unknown dictionary.
    fn dictionary_name(&self, dictionary: Option<&Self::Dictionary>) -> Option<String>;

    /// Stable identifier of a dictionary. `None` for an absent or unknown dictionary.
    fn dictionary_identifier(&self, dictionary: Option<&Self::Dictionary>) -> Option<String>;

    /// Definition text for `word`, or `None` if the dictionary has no entry.
    fn text_definition(&self, dictionary: &Self::Dictionary, word: &str) -> Option<String>;

    /// Collect name and identifier of a dictionary in one value.
    fn describe(&self, dictionary: &Self::Dictionary) -> DictionaryInfo {
        DictionaryInfo {
            name: self.dictionary_name(Some(dictionary)),
            identifier: self.dictionary_identifier(Some(dictionary)),
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

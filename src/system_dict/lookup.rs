// Resolve known system dictionaries and look words up in them
//
// Resolution happens once: enumerating the available dictionaries touches
// every installed bundle, so handles are cached for the lifetime of SystemDict.

use super::SystemDictKind;
use crate::services::DictionaryServices;
use std::collections::HashMap;

/// Find an installed dictionary by its identifier.
///
/// Searches all available dictionaries, enabled or not. Logs an error when
/// the system reports no dictionaries at all, and a warning when the
/// identifier is not among them.
pub fn find_by_identifier<S: DictionaryServices>(
    services: &S,
    identifier: &str,
) -> Option<S::Dictionary> {
    let dictionaries = services.available_dictionaries();
    if dictionaries.is_empty() {
        crate::error!("No system dictionaries are available");
        return None;
    }

    let found = dictionaries
        .into_iter()
        .find(|d| services.dictionary_identifier(Some(d)).as_deref() == Some(identifier));

    if found.is_none() {
        crate::warn!(
            "System dictionary {} is not among the available dictionaries",
            identifier
        );
    }
    found
}

/// Lookups against the known system dictionaries
pub struct SystemDict<S: DictionaryServices> {
    services: S,
    dictionaries: HashMap<SystemDictKind, S::Dictionary>,
}

impl<S: DictionaryServices> SystemDict<S> {
    /// Resolve every known dictionary kind using `services`.
    ///
    /// Kinds that are not installed are skipped; lookups against them return `None`.
    pub fn new(services: S) -> Self {
        let mut dictionaries = HashMap::new();
        for &kind in SystemDictKind::all() {
            if let Some(dictionary) = find_by_identifier(&services, kind.identifier()) {
                dictionaries.entry(kind).or_insert(dictionary);
            }
        }
        crate::info!(
            "Resolved {} of {} system dictionaries",
            dictionaries.len(),
            SystemDictKind::all().len()
        );
        Self {
            services,
            dictionaries,
        }
    }

    /// Look up `word` in the dictionary for `kind`.
    ///
    /// Returns `None` if that dictionary is not installed, has no entry for
    /// the word, or returns an empty definition.
    pub fn lookup(&self, word: &str, kind: SystemDictKind) -> Option<String> {
        let dictionary = self.dictionaries.get(&kind)?;
        let definition = self.services.text_definition(dictionary, word)?;
        if definition.is_empty() {
            crate::trace!("Empty definition for {:?} in {}", word, kind);
            None
        } else {
            Some(definition)
        }
    }

    /// Whether the dictionary for `kind` was found on this system
    pub fn is_available(&self, kind: SystemDictKind) -> bool {
        self.dictionaries.contains_key(&kind)
    }

    /// Kinds that were found, in resolution order
    pub fn resolved_kinds(&self) -> Vec<SystemDictKind> {
        SystemDictKind::all()
            .iter()
            .copied()
            .filter(|kind| self.is_available(*kind))
            .collect()
    }

    pub fn services(&self) -> &S {
        &self.services
    }
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;

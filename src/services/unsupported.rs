// Dictionary Services stand-in for platforms without CoreServices
//
// The framework only exists on macOS. Here no dictionary can ever be
// obtained, so the handle type is uninhabited.

use super::DictionaryServices;
use std::collections::HashSet;

/// Dictionary handle that cannot be constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsupportedDictionary {}

/// Dictionary services for platforms without the system framework
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedDictionaryServices;

impl UnsupportedDictionaryServices {
    pub fn new() -> Self {
        Self
    }
}

impl DictionaryServices for UnsupportedDictionaryServices {
    type Dictionary = UnsupportedDictionary;

    fn active_dictionaries(&self) -> Vec<UnsupportedDictionary> {
        crate::debug!("active_dictionaries called on non-macOS platform (empty)");
        Vec::new()
    }

    fn available_dictionaries(&self) -> HashSet<UnsupportedDictionary> {
        crate::debug!("available_dictionaries called on non-macOS platform (empty)");
        HashSet::new()
    }

    fn dictionary_name(&self, dictionary: Option<&UnsupportedDictionary>) -> Option<String> {
        match dictionary {
            Some(d) => match *d {},
            None => None,
        }
    }

    fn dictionary_identifier(&self, dictionary: Option<&UnsupportedDictionary>) -> Option<String> {
        match dictionary {
            Some(d) => match *d {},
            None => None,
        }
    }

    fn text_definition(&self, dictionary: &UnsupportedDictionary, _word: &str) -> Option<String> {
        match *dictionary {}
    }
}

#[cfg(test)]
#[path = "unsupported_test.rs"]
mod tests;

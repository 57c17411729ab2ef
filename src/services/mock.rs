// In-memory dictionary services for tests
#![cfg_attr(coverage_nightly, coverage(off))]

use super::DictionaryServices;
use std::cell::Cell;
use std::collections::{HashMap, HashSet};

/// Handle into `MockDictionaryServices`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MockDictionary(pub usize);

#[derive(Debug, Clone)]
struct MockEntry {
    name: Option<String>,
    identifier: Option<String>,
    active: bool,
    definitions: HashMap<String, String>,
}

#[derive(Debug, Default)]
pub struct MockDictionaryServices {
    entries: Vec<MockEntry>,
    /// Number of times `available_dictionaries` was called
    pub available_calls: Cell<usize>,
}

impl MockDictionaryServices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dictionary and return its handle
    pub fn add(&mut self, name: &str, identifier: &str, active: bool) -> MockDictionary {
        self.entries.push(MockEntry {
            name: Some(name.to_string()),
            identifier: Some(identifier.to_string()),
            active,
            definitions: HashMap::new(),
        });
        MockDictionary(self.entries.len() - 1)
    }

    /// Register a dictionary the framework reports without metadata
    pub fn add_anonymous(&mut self) -> MockDictionary {
        self.entries.push(MockEntry {
            name: None,
            identifier: None,
            active: false,
            definitions: HashMap::new(),
        });
        MockDictionary(self.entries.len() - 1)
    }

    pub fn define(&mut self, dictionary: MockDictionary, word: &str, definition: &str) {
        self.entries[dictionary.0]
            .definitions
            .insert(word.to_string(), definition.to_string());
    }

    fn entry(&self, dictionary: Option<&MockDictionary>) -> Option<&MockEntry> {
        dictionary.and_then(|d| self.entries.get(d.0))
    }
}

impl DictionaryServices for MockDictionaryServices {
    type Dictionary = MockDictionary;

    fn active_dictionaries(&self) -> Vec<MockDictionary> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.active)
            .map(|(i, _)| MockDictionary(i))
            .collect()
    }

    fn available_dictionaries(&self) -> HashSet<MockDictionary> {
        self.available_calls.set(self.available_calls.get() + 1);
        (0..self.entries.len()).map(MockDictionary).collect()
    }

    fn dictionary_name(&self, dictionary: Option<&MockDictionary>) -> Option<String> {
        self.entry(dictionary)?.name.clone()
    }

    fn dictionary_identifier(&self, dictionary: Option<&MockDictionary>) -> Option<String> {
        self.entry(dictionary)?.identifier.clone()
    }

    fn text_definition(&self, dictionary: &MockDictionary, word: &str) -> Option<String> {
        if word.is_empty() {
            return None;
        }
        self.entry(Some(dictionary))?.definitions.get(word).cloned()
    }
}

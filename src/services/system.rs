// Dictionary Services backend for macOS
//
// Wraps every object returned by the framework with the ownership rule its
// name implies ("Get" = borrowed, "Copy" = owned) so handles are released
// exactly once.

use super::ffi::{
    DCSCopyAvailableDictionaries, DCSCopyTextDefinition, DCSDictionaryGetIdentifier,
    DCSDictionaryGetName, DCSDictionaryRef, DCSGetActiveDictionaries,
};
use super::DictionaryServices;
use core_foundation::array::{CFArrayGetCount, CFArrayGetValueAtIndex};
use core_foundation::base::{CFEqual, CFHash, CFRange, CFRelease, CFType, CFTypeRef, TCFType};
use core_foundation::set::{CFSetGetCount, CFSetGetValues};
use core_foundation::string::{CFString, CFStringRef};
use std::collections::HashSet;
use std::ffi::c_void;
use std::hash::{Hash, Hasher};

/// Retained handle to a `DCSDictionaryRef`
#[derive(Clone)]
pub struct SystemDictionary(CFType);

impl SystemDictionary {
    /// Retain a dictionary reference the caller does not own.
    ///
    /// # Safety
    ///
    /// `reference` must be a valid, non-null `DCSDictionaryRef`.
    unsafe fn wrap_under_get_rule(reference: DCSDictionaryRef) -> Self {
        Self(CFType::wrap_under_get_rule(reference))
    }

    fn as_raw(&self) -> DCSDictionaryRef {
        self.0.as_CFTypeRef()
    }
}

impl PartialEq for SystemDictionary {
    fn eq(&self, other: &Self) -> bool {
        unsafe { CFEqual(self.as_raw(), other.as_raw()) != 0 }
    }
}

impl Eq for SystemDictionary {}

impl Hash for SystemDictionary {
    fn hash<H: Hasher>(&self, state: &mut H) {
        unsafe { CFHash(self.as_raw()) }.hash(state);
    }
}

impl std::fmt::Debug for SystemDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SystemDictionary")
            .field(&self.as_raw())
            .finish()
    }
}

/// Convert a borrowed, possibly null `CFStringRef` into an owned string
unsafe fn string_under_get_rule(reference: CFStringRef) -> Option<String> {
    if reference.is_null() {
        None
    } else {
        Some(CFString::wrap_under_get_rule(reference).to_string())
    }
}

/// Dictionary Services backed by CoreServices.framework
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDictionaryServices;

impl SystemDictionaryServices {
    pub fn new() -> Self {
        Self
    }
}

impl DictionaryServices for SystemDictionaryServices {
    type Dictionary = SystemDictionary;

    fn active_dictionaries(&self) -> Vec<SystemDictionary> {
        unsafe {
            let array = DCSGetActiveDictionaries();
            if array.is_null() {
                crate::warn!("DCSGetActiveDictionaries returned null");
                return Vec::new();
            }

            let count = CFArrayGetCount(array);
            let mut dictionaries = Vec::with_capacity(count.max(0) as usize);
            for i in 0..count {
                let value = CFArrayGetValueAtIndex(array, i);
                if value.is_null() {
                    continue;
                }
                dictionaries.push(SystemDictionary::wrap_under_get_rule(value));
            }
            crate::debug!("Found {} active dictionaries", dictionaries.len());
            dictionaries
        }
    }

    fn available_dictionaries(&self) -> HashSet<SystemDictionary> {
        unsafe {
            let set = DCSCopyAvailableDictionaries();
            if set.is_null() {
                crate::warn!("DCSCopyAvailableDictionaries returned null");
                return HashSet::new();
            }

            let count = CFSetGetCount(set).max(0) as usize;
            let mut values: Vec<*const c_void> = vec![std::ptr::null(); count];
            CFSetGetValues(set, values.as_mut_ptr());

            let dictionaries: HashSet<SystemDictionary> = values
                .into_iter()
                .filter(|value| !value.is_null())
                .map(|value| SystemDictionary::wrap_under_get_rule(value))
                .collect();

            // Members were retained above, so the set itself can go
            CFRelease(set as CFTypeRef);

            crate::debug!("Found {} available dictionaries", dictionaries.len());
            dictionaries
        }
    }

    fn dictionary_name(&self, dictionary: Option<&SystemDictionary>) -> Option<String> {
        let dictionary = dictionary?;
        unsafe { string_under_get_rule(DCSDictionaryGetName(dictionary.as_raw())) }
    }

    fn dictionary_identifier(&self, dictionary: Option<&SystemDictionary>) -> Option<String> {
        let dictionary = dictionary?;
        unsafe { string_under_get_rule(DCSDictionaryGetIdentifier(dictionary.as_raw())) }
    }

    fn text_definition(&self, dictionary: &SystemDictionary, word: &str) -> Option<String> {
        if word.is_empty() {
            return None;
        }

        let text = CFString::new(word);
        // CFRange is measured in UTF-16 code units
        let range = CFRange::init(0, text.char_len());
        unsafe {
            let definition =
                DCSCopyTextDefinition(dictionary.as_raw(), text.as_concrete_TypeRef(), range);
            if definition.is_null() {
                None
            } else {
                Some(CFString::wrap_under_create_rule(definition).to_string())
            }
        }
    }
}

#[cfg(test)]
#[path = "system_test.rs"]
mod tests;

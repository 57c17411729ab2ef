// FFI declarations for Dictionary Services (CoreServices.framework)
//
// The first four functions are private and have no public header. Their
// returned objects are toll-free bridged Foundation types, so they are
// declared here with the matching Core Foundation reference types.

use core_foundation::array::CFArrayRef;
use core_foundation::base::{CFRange, CFTypeRef};
use core_foundation::set::CFSetRef;
use core_foundation::string::CFStringRef;

/// Opaque `DCSDictionaryRef`
pub type DCSDictionaryRef = CFTypeRef;

#[link(name = "CoreServices", kind = "framework")]
extern "C" {
    /// Dictionaries enabled in Dictionary.app. Never null. Not owned by the caller.
    pub fn DCSGetActiveDictionaries() -> CFArrayRef;

    /// All available dictionaries including disabled ones. Never null. Owned by the caller.
    pub fn DCSCopyAvailableDictionaries() -> CFSetRef;

    /// Display name of the dictionary, or null. Not owned by the caller.
    pub fn DCSDictionaryGetName(dictionary: DCSDictionaryRef) -> CFStringRef;

    /// Identifier of the dictionary, or null. Not owned by the caller.
    pub fn DCSDictionaryGetIdentifier(dictionary: DCSDictionaryRef) -> CFStringRef;

    /// Definition of the text in `range`, or null. Owned by the caller.
    pub fn DCSCopyTextDefinition(
        dictionary: DCSDictionaryRef,
        text: CFStringRef,
        range: CFRange,
    ) -> CFStringRef;
}

// Known system dictionaries that can provide annotations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A system dictionary that can be selected for annotations.
///
/// Serialized as the dictionary's identifier so settings files stay
/// meaningful if variants are renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SystemDictKind {
    /// 大辞林 (Japanese monolingual)
    #[default]
    #[serde(rename = "com.apple.dictionary.ja.Daijirin")]
    Daijirin,
    /// ウィズダム英和・和英 (Japanese-English)
    #[serde(rename = "com.apple.dictionary.ja-en.WISDOM")]
    Wisdom,
}

/// Error returned when a name matches no known dictionary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown system dictionary: {0}")]
pub struct UnknownSystemDictKind(pub String);

impl SystemDictKind {
    /// Every known kind, in resolution order
    pub fn all() -> &'static [SystemDictKind] {
        &[SystemDictKind::Daijirin, SystemDictKind::Wisdom]
    }

    /// Dictionary Services identifier of this dictionary
    pub fn identifier(self) -> &'static str {
        match self {
            SystemDictKind::Daijirin => "com.apple.dictionary.ja.Daijirin",
            SystemDictKind::Wisdom => "com.apple.dictionary.ja-en.WISDOM",
        }
    }

    /// Short name used on the command line
    pub fn short_name(self) -> &'static str {
        match self {
            SystemDictKind::Daijirin => "daijirin",
            SystemDictKind::Wisdom => "wisdom",
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<SystemDictKind> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.identifier() == identifier)
    }
}

impl fmt::Display for SystemDictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for SystemDictKind {
    type Err = UnknownSystemDictKind;

    /// Accepts the short name (case-insensitive) or the full identifier
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(kind) = Self::from_identifier(trimmed) {
            return Ok(kind);
        }
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.short_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownSystemDictKind(s.to_string()))
    }
}

#[cfg(test)]
#[path = "kind_test.rs"]
mod tests;

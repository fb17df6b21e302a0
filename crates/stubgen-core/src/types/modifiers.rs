//! Access and property flags, using the class-file bit layout.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A set of modifier flags on a class or member.
///
/// Serialized as a list of keywords (`["public", "final"]`) so descriptor
/// documents stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Modifiers(u16);

impl Modifiers {
    pub const PUBLIC: Modifiers = Modifiers(0x0001);
    pub const PRIVATE: Modifiers = Modifiers(0x0002);
    pub const PROTECTED: Modifiers = Modifiers(0x0004);
    pub const STATIC: Modifiers = Modifiers(0x0008);
    pub const FINAL: Modifiers = Modifiers(0x0010);
    pub const SYNCHRONIZED: Modifiers = Modifiers(0x0020);
    pub const VOLATILE: Modifiers = Modifiers(0x0040);
    pub const TRANSIENT: Modifiers = Modifiers(0x0080);
    pub const NATIVE: Modifiers = Modifiers(0x0100);
    pub const INTERFACE: Modifiers = Modifiers(0x0200);
    pub const ABSTRACT: Modifiers = Modifiers(0x0400);
    pub const STRICT: Modifiers = Modifiers(0x0800);
    pub const SYNTHETIC: Modifiers = Modifiers(0x1000);
    pub const ANNOTATION: Modifiers = Modifiers(0x2000);
    pub const ENUM: Modifiers = Modifiers(0x4000);

    const KEYWORDS: &'static [(&'static str, Modifiers)] = &[
        ("public", Self::PUBLIC),
        ("private", Self::PRIVATE),
        ("protected", Self::PROTECTED),
        ("static", Self::STATIC),
        ("final", Self::FINAL),
        ("synchronized", Self::SYNCHRONIZED),
        ("volatile", Self::VOLATILE),
        ("transient", Self::TRANSIENT),
        ("native", Self::NATIVE),
        ("interface", Self::INTERFACE),
        ("abstract", Self::ABSTRACT),
        ("strict", Self::STRICT),
        ("synthetic", Self::SYNTHETIC),
        ("annotation", Self::ANNOTATION),
        ("enum", Self::ENUM),
    ];

    pub const fn empty() -> Self {
        Modifiers(0)
    }

    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn with(self, other: Modifiers) -> Self {
        Modifiers(self.0 | other.0)
    }

    #[must_use]
    pub const fn without(self, other: Modifiers) -> Self {
        Modifiers(self.0 & !other.0)
    }

    pub const fn is_public(self) -> bool {
        self.contains(Self::PUBLIC)
    }

    pub const fn is_private(self) -> bool {
        self.contains(Self::PRIVATE)
    }

    pub const fn is_final(self) -> bool {
        self.contains(Self::FINAL)
    }

    pub const fn is_native(self) -> bool {
        self.contains(Self::NATIVE)
    }

    pub const fn is_abstract(self) -> bool {
        self.contains(Self::ABSTRACT)
    }

    pub const fn is_interface(self) -> bool {
        self.contains(Self::INTERFACE)
    }

    pub const fn is_enum(self) -> bool {
        self.contains(Self::ENUM)
    }

    /// Keywords for the set flags, in class-file bit order.
    pub fn keywords(self) -> Vec<&'static str> {
        Self::KEYWORDS
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::KEYWORDS
            .iter()
            .find(|(name, _)| *name == keyword)
            .map(|(_, flag)| *flag)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.with(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keywords().join(" "))
    }
}

impl TryFrom<Vec<String>> for Modifiers {
    type Error = String;

    fn try_from(keywords: Vec<String>) -> Result<Self, Self::Error> {
        keywords.iter().try_fold(Modifiers::empty(), |acc, kw| {
            Modifiers::from_keyword(kw)
                .map(|flag| acc.with(flag))
                .ok_or_else(|| format!("unknown modifier '{kw}'"))
        })
    }
}

impl From<Modifiers> for Vec<String> {
    fn from(modifiers: Modifiers) -> Self {
        modifiers.keywords().into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_clears_only_requested_flag() {
        let m = Modifiers::PUBLIC | Modifiers::FINAL | Modifiers::STATIC;
        let cleared = m.without(Modifiers::FINAL);
        assert!(cleared.is_public());
        assert!(!cleared.is_final());
        assert!(cleared.contains(Modifiers::STATIC));
    }

    #[test]
    fn keywords_round_trip_through_serde() {
        let m = Modifiers::PUBLIC | Modifiers::ABSTRACT;
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"["public","abstract"]"#);
        let back: Modifiers = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        let result: Result<Modifiers, _> = serde_json::from_str(r#"["public","sealed"]"#);
        assert!(result.is_err());
    }
}

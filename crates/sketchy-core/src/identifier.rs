//! Interned names for document tags and classes.
//!
//! Element classification compares tag names and class names over and over
//! (once per selector rule, once per lookup). This module provides the [`Id`]
//! type, a string-interned name that compares by symbol.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for names.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn with_interner<T>(f: impl FnOnce(&mut DefaultStringInterner) -> T) -> T {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    f(&mut interner)
}

/// Interned name of a tag or a class.
///
/// # Examples
///
/// ```
/// use sketchy_core::identifier::Id;
///
/// let class = Id::new("hached");
/// assert_eq!(class, "hached");
///
/// // Tag names are case-insensitive
/// assert_eq!(Id::tag("LABEL"), Id::tag("label"));
/// assert_eq!(Id::tag("BODY"), "body");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str, preserving case.
    ///
    /// Class names are case-sensitive, so `SketchyBurger` and `sketchyburger`
    /// are distinct ids.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Creates an `Id` for a tag name, normalized to lowercase.
    pub fn tag(name: &str) -> Self {
        Self::new(&name.to_ascii_lowercase())
    }

    /// Returns the interned string.
    pub fn as_string(&self) -> String {
        with_interner(|interner| {
            interner
                .resolve(self.0)
                .expect("Symbol should exist in interner")
                .to_string()
        })
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| interner.resolve(self.0) == Some(other))
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

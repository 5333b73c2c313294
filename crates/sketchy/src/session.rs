//! Page-session wiring: which elements get decorated, and when.

use std::{fmt, str::FromStr};

use log::{info, warn};

use sketchy_core::{
    document::{DocumentError, ElementId, HostDocument},
    draw::ShapeRenderer,
    identifier::Id,
};

use crate::{error::SketchyError, manager::DecorationManager};

/// Targets decorated when a page loads, in registration order.
pub const DEFAULT_TARGETS: [&str; 8] = [
    "#history",
    "#formSketch",
    ".team-member",
    "label",
    "#navbar",
    "footer:first",
    "body:first",
    ".menu-button:first",
];

/// Suffix restricting a selector to its first match.
const FIRST_SUFFIX: &str = ":first";

/// A simple element selector.
///
/// - `#name` matches the first element whose id is `name`
/// - `.name` matches every element with class `name`
/// - `name` matches every element with tag `name`
/// - any of the above followed by `:first` matches only the first of those
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSelector {
    Id(String),
    Class(Id),
    Tag(Id),
    First(Box<TargetSelector>),
}

impl TargetSelector {
    /// Resolves the selector against a document, in tree order.
    pub fn resolve(&self, document: &dyn HostDocument) -> Vec<ElementId> {
        match self {
            Self::Id(id) => document.element_by_id(id).into_iter().collect(),
            Self::Class(class) => document.elements_by_class(*class),
            Self::Tag(tag) => document.elements_by_tag(*tag),
            Self::First(inner) => inner.resolve(document).into_iter().take(1).collect(),
        }
    }
}

impl FromStr for TargetSelector {
    type Err = SketchyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || SketchyError::Config(format!("invalid target selector `{s}`"));

        if let Some(inner) = s.strip_suffix(FIRST_SUFFIX) {
            return match inner.parse()? {
                Self::First(_) => Err(invalid()),
                simple => Ok(Self::First(Box::new(simple))),
            };
        }

        if let Some(id) = s.strip_prefix('#') {
            if id.is_empty() || id.contains(char::is_whitespace) {
                return Err(invalid());
            }
            Ok(Self::Id(id.to_string()))
        } else if let Some(class) = s.strip_prefix('.') {
            if class.is_empty() || class.contains(char::is_whitespace) {
                return Err(invalid());
            }
            Ok(Self::Class(Id::new(class)))
        } else if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            Ok(Self::Tag(Id::tag(s)))
        } else {
            Err(invalid())
        }
    }
}

impl fmt::Display for TargetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
            Self::Tag(tag) => write!(f, "{tag}"),
            Self::First(inner) => write!(f, "{inner}{FIRST_SUFFIX}"),
        }
    }
}

/// Parses a list of selector strings.
///
/// # Errors
///
/// Returns [`SketchyError::Config`] for the first invalid selector.
pub fn parse_targets<S: AsRef<str>>(selectors: &[S]) -> Result<Vec<TargetSelector>, SketchyError> {
    selectors
        .iter()
        .map(|selector| selector.as_ref().parse())
        .collect()
}

/// Decorates a page on load and redraws it on every viewport resize.
#[derive(Debug)]
pub struct Session<R: ShapeRenderer> {
    manager: DecorationManager<R>,
    targets: Vec<TargetSelector>,
}

impl<R: ShapeRenderer> Session<R> {
    pub fn new(renderer: R, targets: Vec<TargetSelector>) -> Self {
        Self {
            manager: DecorationManager::new(renderer),
            targets,
        }
    }

    /// Creates a session over [`DEFAULT_TARGETS`].
    pub fn with_default_targets(renderer: R) -> Result<Self, SketchyError> {
        Ok(Self::new(renderer, parse_targets(&DEFAULT_TARGETS)?))
    }

    /// Decorates every element matched by the targets.
    ///
    /// Targets matching nothing are skipped with a warning. Returns the number
    /// of elements decorated.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] if the document reports a stale element.
    pub fn load(&mut self, document: &mut dyn HostDocument) -> Result<usize, DocumentError> {
        let mut decorated = 0;
        for target in &self.targets {
            let elements = target.resolve(document);
            if elements.is_empty() {
                warn!(target:% = target; "Target matched no element, skipping");
                continue;
            }
            for element in elements {
                self.manager.add_element(document, element)?;
                decorated += 1;
            }
        }

        info!(decorated = decorated, targets = self.targets.len(); "Page decorated");
        Ok(decorated)
    }

    /// Redraws every decoration after a viewport change.
    ///
    /// # Errors
    ///
    /// Returns the first [`DocumentError`] raised while redrawing.
    pub fn resize(&mut self, document: &mut dyn HostDocument) -> Result<(), DocumentError> {
        info!(decorations = self.manager.len(); "Viewport resized, redrawing");
        self.manager.redraw_all(document)
    }

    pub fn targets(&self) -> &[TargetSelector] {
        &self.targets
    }

    pub fn manager(&self) -> &DecorationManager<R> {
        &self.manager
    }
}

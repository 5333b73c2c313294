//! Configuration types for sketchy decoration and export.
//!
//! All types implement [`serde::Deserialize`], so a configuration can be
//! loaded from TOML:
//!
//! ```toml
//! [render]
//! seed = 42
//! multi_stroke = false
//!
//! [targets]
//! selectors = ["body", ".card", "#signup"]
//!
//! [export]
//! background_color = "#fffdf5"
//! ```
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`RenderConfig`] - Hand-drawn renderer settings.
//! - [`TargetsConfig`] - Which elements are decorated when a page loads.
//! - [`ExportConfig`] - SVG snapshot settings.
//!
//! # Example
//!
//! ```
//! # use sketchy::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.render().multi_stroke());
//! assert_eq!(config.targets().selectors().len(), 8);
//! ```

use serde::Deserialize;

use sketchy_core::color::Color;

use crate::{
    error::SketchyError,
    rough::RoughRenderer,
    session::{DEFAULT_TARGETS, TargetSelector, parse_targets},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    render: RenderConfig,

    #[serde(default)]
    targets: TargetsConfig,

    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    pub fn new(render: RenderConfig, targets: TargetsConfig, export: ExportConfig) -> Self {
        Self {
            render,
            targets,
            export,
        }
    }

    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns a mutable reference to the render configuration.
    pub fn render_mut(&mut self) -> &mut RenderConfig {
        &mut self.render
    }

    pub fn targets(&self) -> &TargetsConfig {
        &self.targets
    }

    pub fn export(&self) -> &ExportConfig {
        &self.export
    }
}

/// Settings of the hand-drawn renderer.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Seed of the jitter; `None` draws differently on every run.
    #[serde(default)]
    seed: Option<u64>,

    /// Draw every stroke twice.
    #[serde(default = "default_multi_stroke")]
    multi_stroke: bool,
}

fn default_multi_stroke() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            seed: None,
            multi_stroke: default_multi_stroke(),
        }
    }
}

impl RenderConfig {
    pub fn new(seed: Option<u64>, multi_stroke: bool) -> Self {
        Self { seed, multi_stroke }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn multi_stroke(&self) -> bool {
        self.multi_stroke
    }

    /// Builds the renderer these settings describe.
    pub fn renderer(&self) -> RoughRenderer {
        let renderer = match self.seed {
            Some(seed) => RoughRenderer::with_seed(seed),
            None => RoughRenderer::new(),
        };
        renderer.with_multi_stroke(self.multi_stroke)
    }
}

/// Elements decorated when a page loads.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetsConfig {
    /// Selectors in registration order: `#id`, `.class` or `tag`, each
    /// optionally followed by `:first`.
    #[serde(default = "default_selectors")]
    selectors: Vec<String>,
}

fn default_selectors() -> Vec<String> {
    DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect()
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            selectors: default_selectors(),
        }
    }
}

impl TargetsConfig {
    pub fn new(selectors: Vec<String>) -> Self {
        Self { selectors }
    }

    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// Parses the configured selectors.
    ///
    /// # Errors
    ///
    /// Returns [`SketchyError::Config`] for the first invalid selector.
    pub fn parse(&self) -> Result<Vec<TargetSelector>, SketchyError> {
        parse_targets(&self.selectors)
    }
}

/// SVG snapshot settings.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Page background, as a color string; defaults to the body background.
    #[serde(default)]
    background_color: Option<String>,
}

impl ExportConfig {
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

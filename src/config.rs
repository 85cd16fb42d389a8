//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock
//! defaults are the base layer; a user `config.toml` in the content
//! root overrides just the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [theme]
//! max_width = "80rem"       # Page content max width
//! card_radius = "1rem"      # Corner radius for project/skill cards
//! chip_radius = "999px"     # Corner radius for tag chips
//!
//! [theme.section_padding]
//! size = "8vw"              # Preferred vertical section padding
//! min = "5rem"              # Minimum vertical section padding
//! max = "7rem"              # Maximum vertical section padding
//!
//! [animation]
//! duration_ms = 1000        # Entrance animation duration
//! easing = "ease-out-cubic" # Entrance animation easing curve
//! once = true               # Animate each element only on first reveal
//!
//! [images]
//! profile_sizes = [256, 512] # Square profile photo sizes to generate
//! quality = 90               # JPEG quality (0-100)
//!
//! [colors.light]
//! background = "#ffffff"
//! # ... see stock config for the full set
//!
//! [colors.dark]
//! background = "#020617"
//! # ...
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only override the reveal highlight color
//! [colors.dark]
//! highlight = "#22d3ee"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Theme/layout settings (content width, spacing, radii).
    pub theme: ThemeConfig,
    /// Entrance animation settings.
    pub animation: AnimationConfig,
    /// Profile photo processing settings.
    pub images: ImagesConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images.quality > 100 {
            return Err(ConfigError::Validation(
                "images.quality must be 0-100".into(),
            ));
        }
        if self.images.profile_sizes.is_empty() {
            return Err(ConfigError::Validation(
                "images.profile_sizes must not be empty".into(),
            ));
        }
        if self.images.profile_sizes.iter().any(|&s| s == 0) {
            return Err(ConfigError::Validation(
                "images.profile_sizes values must be non-zero".into(),
            ));
        }
        if self.animation.duration_ms == 0 {
            return Err(ConfigError::Validation(
                "animation.duration_ms must be non-zero".into(),
            ));
        }
        if easing_css(&self.animation.easing).is_none() {
            return Err(ConfigError::Validation(format!(
                "animation.easing '{}' is not recognized (known: {})",
                self.animation.easing,
                EASINGS
                    .iter()
                    .map(|(name, _)| *name)
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }
        Ok(())
    }
}

/// Entrance animation settings.
///
/// These drive the scroll-triggered entrance animations of page
/// elements (`data-animate` attributes), not the per-letter name
/// reveal, whose rules are fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Duration of each entrance animation, in milliseconds.
    pub duration_ms: u32,
    /// Easing curve name, resolved to CSS via [`easing_css`].
    pub easing: String,
    /// If true, each element animates only the first time it enters the
    /// viewport.
    pub once: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            easing: "ease-out-cubic".to_string(),
            once: true,
        }
    }
}

/// Known easing names and their CSS values.
///
/// The cubic variants are not CSS keywords, so they resolve to the
/// matching `cubic-bezier()` curves.
pub const EASINGS: &[(&str, &str)] = &[
    ("linear", "linear"),
    ("ease", "ease"),
    ("ease-in", "ease-in"),
    ("ease-out", "ease-out"),
    ("ease-in-out", "ease-in-out"),
    ("ease-out-cubic", "cubic-bezier(0.215, 0.61, 0.355, 1)"),
    ("ease-in-out-cubic", "cubic-bezier(0.645, 0.045, 0.355, 1)"),
];

/// Resolve an easing name to its CSS value. `None` for unknown names.
pub fn easing_css(name: &str) -> Option<&'static str> {
    EASINGS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, css)| *css)
}

/// Profile photo processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Square pixel sizes to generate from the profile photo.
    pub profile_sizes: Vec<u32>,
    /// JPEG encoding quality (0 = worst, 100 = best).
    pub quality: u32,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            profile_sizes: vec![256, 512],
            quality: 90,
        }
    }
}

/// A responsive CSS size expressed as `clamp(min, size, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClampSize {
    /// Preferred/fluid value, typically viewport-relative (e.g. `"8vw"`).
    pub size: String,
    /// Minimum bound (e.g. `"5rem"`).
    pub min: String,
    /// Maximum bound (e.g. `"7rem"`).
    pub max: String,
}

impl ClampSize {
    /// Render as a CSS `clamp()` expression.
    pub fn to_css(&self) -> String {
        format!("clamp({}, {}, {})", self.min, self.size, self.max)
    }
}

/// Theme/layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Maximum width of page content (CSS value).
    pub max_width: String,
    /// Vertical padding above and below each section.
    pub section_padding: ClampSize,
    /// Corner radius for project and skill cards (CSS value).
    pub card_radius: String,
    /// Corner radius for tag chips (CSS value).
    pub chip_radius: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            max_width: "80rem".to_string(),
            section_padding: ClampSize {
                size: "8vw".to_string(),
                min: "5rem".to_string(),
                max: "7rem".to_string(),
            },
            card_radius: "1rem".to_string(),
            chip_radius: "999px".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background color.
    pub background: String,
    /// Card/panel background color.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (nav, captions, descriptions).
    pub text_muted: String,
    /// Border color for cards, chips, and the header rule.
    pub border: String,
    /// Accent color (buttons, active nav link, section headings).
    pub accent: String,
    /// Accent hover state.
    pub accent_hover: String,
    /// Solid color for the leading letters of the name reveal.
    pub highlight: String,
    /// Start color of the hero name gradient.
    pub gradient_start: String,
    /// End color of the hero name gradient.
    pub gradient_end: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f8fafc".to_string(),
            text: "#0f172a".to_string(),
            text_muted: "#475569".to_string(),
            border: "#e2e8f0".to_string(),
            accent: "#4f46e5".to_string(),
            accent_hover: "#4338ca".to_string(),
            highlight: "#F54927".to_string(),
            gradient_start: "#4f46e5".to_string(),
            gradient_end: "#c026d3".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#020617".to_string(),
            surface: "#0f172a".to_string(),
            text: "#f1f5f9".to_string(),
            text_muted: "#94a3b8".to_string(),
            border: "#1e293b".to_string(),
            accent: "#6366f1".to_string(),
            accent_hover: "#818cf8".to_string(),
            highlight: "#F54927".to_string(),
            gradient_start: "#818cf8".to_string(),
            gradient_end: "#e879f9".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_dark()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Monofolio Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the content root, next to portfolio.toml.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
# Maximum width of page content (CSS value).
max_width = "80rem"

# Corner radius for project and skill cards (CSS value).
card_radius = "1rem"

# Corner radius for tag chips (CSS value).
chip_radius = "999px"

# Vertical section padding, as CSS clamp(min, size, max).
[theme.section_padding]
size = "8vw"
min = "5rem"
max = "7rem"

# ---------------------------------------------------------------------------
# Entrance animations
# ---------------------------------------------------------------------------
[animation]
# Duration of each entrance animation, in milliseconds.
duration_ms = 1000

# Easing curve. One of: linear, ease, ease-in, ease-out, ease-in-out,
# ease-out-cubic, ease-in-out-cubic.
easing = "ease-out-cubic"

# Animate each element only the first time it scrolls into view.
once = true

# ---------------------------------------------------------------------------
# Profile photo processing
# ---------------------------------------------------------------------------
[images]
# Square pixel sizes generated from assets/<profile photo>.
profile_sizes = [256, 512]

# JPEG encoding quality (0 = worst, 100 = best).
quality = 90

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#f8fafc"
text = "#0f172a"
text_muted = "#475569"
border = "#e2e8f0"
accent = "#4f46e5"
accent_hover = "#4338ca"
highlight = "#F54927"        # Leading letters of the name reveal
gradient_start = "#4f46e5"   # Hero name gradient
gradient_end = "#c026d3"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#020617"
surface = "#0f172a"
text = "#f1f5f9"
text_muted = "#94a3b8"
border = "#1e293b"
accent = "#6366f1"
accent_hover = "#818cf8"
highlight = "#F54927"
gradient_start = "#818cf8"
gradient_end = "#e879f9"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    fn scheme_block(scheme: &ColorScheme, indent: &str) -> String {
        [
            ("--color-bg", &scheme.background),
            ("--color-surface", &scheme.surface),
            ("--color-text", &scheme.text),
            ("--color-text-muted", &scheme.text_muted),
            ("--color-border", &scheme.border),
            ("--color-accent", &scheme.accent),
            ("--color-accent-hover", &scheme.accent_hover),
            ("--color-highlight", &scheme.highlight),
            ("--gradient-start", &scheme.gradient_start),
            ("--gradient-end", &scheme.gradient_end),
        ]
        .iter()
        .map(|(name, value)| format!("{indent}{name}: {value};"))
        .collect::<Vec<_>>()
        .join("\n")
    }

    format!(
        ":root {{\n{light}\n}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{dark}\n    }}\n}}",
        light = scheme_block(&colors.light, "    "),
        dark = scheme_block(&colors.dark, "        "),
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --max-width: {max_width};
    --section-padding: {section_padding};
    --card-radius: {card_radius};
    --chip-radius: {chip_radius};
}}"#,
        max_width = theme.max_width,
        section_padding = theme.section_padding.to_css(),
        card_radius = theme.card_radius,
        chip_radius = theme.chip_radius,
    )
}

/// Generate CSS custom properties from animation config.
///
/// Call only with a validated config; an unknown easing falls back to
/// `ease` rather than emitting broken CSS.
pub fn generate_animation_css(animation: &AnimationConfig) -> String {
    format!(
        r#":root {{
    --animate-duration: {duration}ms;
    --animate-easing: {easing};
}}"#,
        duration = animation.duration_ms,
        easing = easing_css(&animation.easing).unwrap_or("ease"),
    )
}

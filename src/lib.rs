//! # Monofolio
//!
//! A static site generator for single-page developer portfolios. One
//! TOML file is the data source: profile, navigation, projects, skills,
//! and contact entries become a single polished page with scroll-based
//! navigation highlighting and staggered entrance animations.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Monofolio processes content through two independent stages, joined
//! by a JSON manifest:
//!
//! ```text
//! 1. Load      content/  →  manifest.json    (TOML + markdown → structured data)
//! 2. Generate  manifest  →  dist/            (final single-page HTML site)
//! ```
//!
//! This separation exists for two reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Testability**: generation is a pure function from manifest to
//!   markup, so tests can exercise rendering without touching the
//!   filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Stage 1 — parses and validates `portfolio.toml`, `about.md` and assets into the manifest |
//! | [`generate`] | Stage 2 — renders the page from the manifest using Maud, copies assets |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS custom-property generation |
//! | [`tracker`] | Scroll-position nav highlighting: state machine + emitted observer script |
//! | [`reveal`] | Per-letter styling for the staggered hero name reveal |
//! | [`imaging`] | Profile photo processing: square crop + Lanczos3 resize to display sizes |
//! | [`output`] | CLI output formatting — information-first display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Advantages:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## One Page, Everything Inline
//!
//! The whole site is a single `index.html` with CSS and JavaScript
//! inlined: one request, no asset graph to break, trivially hostable
//! anywhere. Only images and downloads live as separate files.
//!
//! ## The Browser Runtime Is Generated, Not Hand-Synced
//!
//! The nav-highlight behavior is specified as a plain Rust state machine
//! in [`tracker`] and the shipped `IntersectionObserver` script is
//! emitted from it, with the section set, threshold, and default baked
//! in. The unit tests pin the behavioral contract (last intersecting
//! report wins, idempotent teardown, inert without observer support)
//! against the same constants the script is generated from.
//!
//! ## Pure-Rust Imaging
//!
//! The profile photo is cropped and resized with the `image` crate
//! (Lanczos3 resampling) — no ImageMagick, no system dependencies. The
//! binary is fully self-contained: download it and it works, on any
//! machine, indefinitely.
//!
//! ## Graceful Degradation Over Polyfills
//!
//! The generated page treats viewport observation as optional: without
//! `IntersectionObserver`, nav highlighting stays inert at the hero and
//! entrance animations show everything immediately. No error surface,
//! no polyfill payload.

pub mod config;
pub mod content;
pub mod generate;
pub mod imaging;
pub mod output;
pub mod reveal;
pub mod tracker;

#[cfg(test)]
pub(crate) mod test_helpers;

//! Content loading and validation.
//!
//! Stage 1 of the build pipeline. Reads the content directory into a
//! structured [`Manifest`] that the generate stage consumes.
//!
//! ## Content Structure
//!
//! ```text
//! content/
//! ├── portfolio.toml    # The portfolio data (required)
//! ├── config.toml       # Site configuration (optional)
//! ├── about.md          # About-section body, markdown (optional)
//! └── assets/           # Profile photo, CV, icons (optional)
//!     ├── profile.jpg
//!     ├── cv.pdf
//!     └── icons/
//! ```
//!
//! ## portfolio.toml
//!
//! ```toml
//! [profile]
//! name = "NEHA RAJAWAT"        # Hero name, revealed letter by letter
//! brand = "Neha Rajawat"       # Header wordmark
//! initials = "NR"              # Logo mark
//! badge = "Aspiring Software Engineer"
//! tagline = "B.E. in Computer Science with AI"
//! photo = "profile.jpg"        # Relative to assets/
//! cv = "cv.pdf"                # Relative to assets/
//!
//! [[profile.facts]]
//! label = "Location"
//! value = "Greater Noida, India"
//!
//! [[nav]]
//! id = "about"                 # Section anchor; "home" is reserved
//! label = "About"
//!
//! [[projects]]
//! title = "Shopping-Cart App"
//! description = "ReactJS + Redux app with dynamic cart management."
//! tags = [{ label = "React", color = "sky" }]
//!
//! [[skills]]
//! name = "Python"
//! category = "Backend / ML"
//!
//! skill_tags = ["Problem-solving", "Full-stack"]
//!
//! [[contact]]
//! text = "nrajawat50@gmail.com"
//! href = "mailto:nrajawat50@gmail.com"
//! icon = "icons/email-icon.svg" # Relative to assets/
//! ```
//!
//! ## Validation
//!
//! The loader enforces these rules:
//! - profile name, brand, and nav labels are non-empty
//! - nav ids are unique, anchor-safe, and never the reserved hero id
//! - contact links use `mailto:`, `tel:`, `http:` or `https:`
//! - tag colors come from the known palette
//! - referenced assets (photo, CV, icons) exist under `assets/`

use crate::config::{self, SiteConfig};
use crate::tracker;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("portfolio.toml not found in {0}")]
    MissingPortfolio(PathBuf),
    #[error("profile.{0} must not be empty")]
    EmptyProfileField(&'static str),
    #[error("nav link '{0}' has an empty label")]
    EmptyNavLabel(String),
    #[error("duplicate nav link id: {0}")]
    DuplicateNavId(String),
    #[error("nav link id '{0}' is reserved for the hero section")]
    ReservedNavId(String),
    #[error("invalid section id '{0}': lowercase letters, digits and dashes only")]
    InvalidSectionId(String),
    #[error("contact link '{0}' must be a mailto:, tel:, http: or https: URL")]
    InvalidContactHref(String),
    #[error("unknown tag color '{color}' on project '{project}'")]
    UnknownTagColor { color: String, project: String },
    #[error("referenced asset not found: assets/{0}")]
    MissingAsset(String),
}

/// Directory under the content root holding static assets.
pub const ASSETS_DIR: &str = "assets";

/// Named chip colors available for project tags.
///
/// Each name maps to a `.chip-<name>` rule in the stylesheet; tag colors
/// outside this set are a content error.
pub const TAG_COLORS: &[&str] = &[
    "indigo", "blue", "sky", "emerald", "fuchsia", "violet", "amber", "pink", "slate", "rose",
];

/// Manifest output from the load stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub portfolio: Portfolio,
    /// Raw markdown body of `about.md`, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    pub config: SiteConfig,
}

/// The whole of `portfolio.toml`: pure display data, read-only after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub skill_tags: Vec<String>,
    #[serde(default)]
    pub contact: Vec<ContactEntry>,
}

impl Portfolio {
    /// All observable section ids in document order: the hero first,
    /// then one section per nav link.
    pub fn section_ids(&self) -> Vec<String> {
        std::iter::once(tracker::DEFAULT_SECTION.to_string())
            .chain(self.nav.iter().map(|link| link.id.clone()))
            .collect()
    }
}

/// Identity and hero/about data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Display name, revealed letter by letter in the hero.
    pub name: String,
    /// Wordmark next to the logo in the header.
    pub brand: String,
    /// Short initials shown in the logo mark.
    pub initials: String,
    /// Status chip above the hero name.
    #[serde(default)]
    pub badge: Option<String>,
    /// One-liner under the hero name.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Profile photo, relative to `assets/`.
    #[serde(default)]
    pub photo: Option<String>,
    /// Downloadable CV, relative to `assets/`.
    #[serde(default)]
    pub cv: Option<String>,
    /// Label/value pairs for the about-section facts grid.
    #[serde(default)]
    pub facts: Vec<Fact>,
}

/// One entry of the about-section facts grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

/// A navigation entry pointing at a page section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    /// Section anchor, unique across the nav.
    pub id: String,
    /// Display label, also used as the section heading.
    pub label: String,
}

/// A project card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// A colored chip on a project card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    pub label: String,
    /// One of [`TAG_COLORS`].
    pub color: String,
}

/// A skill grid entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    pub category: String,
}

/// A contact-section entry. Entries without an `href` render as plain
/// text (e.g. a phone number not meant to be a link).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactEntry {
    pub text: String,
    #[serde(default)]
    pub href: Option<String>,
    /// Icon path relative to `assets/`.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Load and validate the content directory into a manifest.
pub fn load(root: &Path) -> Result<Manifest, ContentError> {
    let portfolio_path = root.join("portfolio.toml");
    if !portfolio_path.exists() {
        return Err(ContentError::MissingPortfolio(root.to_path_buf()));
    }
    let portfolio: Portfolio = toml::from_str(&fs::read_to_string(&portfolio_path)?)?;
    validate(&portfolio, root)?;

    let about_path = root.join("about.md");
    let about = if about_path.exists() {
        Some(fs::read_to_string(&about_path)?)
    } else {
        None
    };

    // Site config (uses defaults if config.toml doesn't exist)
    let config = config::load_config(root)?;

    Ok(Manifest {
        portfolio,
        about,
        config,
    })
}

/// A valid section id is anchor-safe: lowercase ASCII letters, digits
/// and dashes, starting with a letter.
fn is_valid_section_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

const ALLOWED_HREF_SCHEMES: &[&str] = &["mailto:", "tel:", "http://", "https://"];

fn validate(portfolio: &Portfolio, root: &Path) -> Result<(), ContentError> {
    let profile = &portfolio.profile;
    if profile.name.trim().is_empty() {
        return Err(ContentError::EmptyProfileField("name"));
    }
    if profile.brand.trim().is_empty() {
        return Err(ContentError::EmptyProfileField("brand"));
    }
    if profile.initials.trim().is_empty() {
        return Err(ContentError::EmptyProfileField("initials"));
    }

    let mut seen_ids: Vec<&str> = Vec::new();
    for link in &portfolio.nav {
        if link.label.trim().is_empty() {
            return Err(ContentError::EmptyNavLabel(link.id.clone()));
        }
        if link.id == tracker::DEFAULT_SECTION {
            return Err(ContentError::ReservedNavId(link.id.clone()));
        }
        if !is_valid_section_id(&link.id) {
            return Err(ContentError::InvalidSectionId(link.id.clone()));
        }
        if seen_ids.contains(&link.id.as_str()) {
            return Err(ContentError::DuplicateNavId(link.id.clone()));
        }
        seen_ids.push(&link.id);
    }

    for project in &portfolio.projects {
        for tag in &project.tags {
            if !TAG_COLORS.contains(&tag.color.as_str()) {
                return Err(ContentError::UnknownTagColor {
                    color: tag.color.clone(),
                    project: project.title.clone(),
                });
            }
        }
    }

    for entry in &portfolio.contact {
        if let Some(href) = &entry.href {
            if !ALLOWED_HREF_SCHEMES
                .iter()
                .any(|scheme| href.starts_with(scheme))
            {
                return Err(ContentError::InvalidContactHref(href.clone()));
            }
        }
    }

    // Every referenced asset must exist under assets/.
    let assets = root.join(ASSETS_DIR);
    let mut referenced: Vec<&str> = Vec::new();
    referenced.extend(profile.photo.as_deref());
    referenced.extend(profile.cv.as_deref());
    referenced.extend(portfolio.contact.iter().filter_map(|c| c.icon.as_deref()));
    for rel in referenced {
        if !assets.join(rel).exists() {
            return Err(ContentError::MissingAsset(rel.to_string()));
        }
    }

    Ok(())
}

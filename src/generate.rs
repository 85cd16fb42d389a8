//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the load-stage manifest and
//! generates the finished single-page site.
//!
//! ## Generated Output
//!
//! ```text
//! dist/
//! ├── index.html            # The whole site: markup, inline CSS + JS
//! ├── profile-256.jpg       # Profile photo variants (when a photo is set)
//! ├── profile-512.jpg
//! ├── profile.jpg           # Copied assets
//! ├── cv.pdf
//! └── icons/
//!     └── email-icon.svg
//! ```
//!
//! ## Page Structure
//!
//! One `<section id>` per navigation entry, hero first. Section
//! renderers are keyed by nav id — `about`, `projects`, `skills` and
//! `contact` get their full layouts, anything else a bare titled
//! section so the anchor and nav highlighting still work.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: base styles (custom properties injected from config)
//! - `static/animate.js`: entrance animations, name reveal kick-off,
//!   mobile menu collapse
//!
//! The nav-highlight observer script is generated per site by
//! [`crate::tracker::observer_script`], baking in the page's section set.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config;
use crate::content::{self, ContactEntry, Manifest, NavLink, Profile, Project, Skill};
use crate::imaging::{self, ProfileVariant};
use crate::reveal::{self, RevealedLetter};
use crate::tracker::{self, SectionTracker};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Imaging error: {0}")]
    Imaging(#[from] imaging::ImagingError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const ANIMATE_JS: &str = include_str!("../static/animate.js");

/// What the generate stage produced, for CLI reporting.
#[derive(Debug)]
pub struct GenerateReport {
    /// `(anchor id, heading)` per rendered section, hero first.
    pub sections: Vec<(String, String)>,
    /// Files copied from the content `assets/` directory.
    pub assets_copied: usize,
    /// Profile photo sizes generated.
    pub profile_variants: Vec<ProfileVariant>,
}

pub fn generate(
    manifest_path: &Path,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let manifest: Manifest = serde_json::from_str(&fs::read_to_string(manifest_path)?)?;

    // Assemble CSS: config-driven custom properties, then static rules.
    let css = format!(
        "{}\n\n{}\n\n{}\n\n{}",
        config::generate_color_css(&manifest.config.colors),
        config::generate_theme_css(&manifest.config.theme),
        config::generate_animation_css(&manifest.config.animation),
        CSS_STATIC,
    );

    fs::create_dir_all(output_dir)?;

    let assets_copied = copy_assets(source_dir, output_dir)?;

    let profile_variants = match &manifest.portfolio.profile.photo {
        Some(photo) => imaging::profile_variants(
            &source_dir.join(content::ASSETS_DIR).join(photo),
            output_dir,
            &manifest.config.images.profile_sizes,
            manifest.config.images.quality,
        )?,
        None => Vec::new(),
    };

    let tracker = SectionTracker::new(manifest.portfolio.section_ids());
    let page = render_page(&manifest, &profile_variants, &tracker, &css);
    fs::write(output_dir.join("index.html"), page.into_string())?;

    let mut sections = vec![(tracker::DEFAULT_SECTION.to_string(), "Hero".to_string())];
    sections.extend(
        manifest
            .portfolio
            .nav
            .iter()
            .map(|link| (link.id.clone(), link.label.clone())),
    );

    Ok(GenerateReport {
        sections,
        assets_copied,
        profile_variants,
    })
}

/// Copy the content `assets/` tree into the output root.
///
/// Returns the number of files copied; zero when there is no assets
/// directory.
fn copy_assets(source_dir: &Path, output_dir: &Path) -> std::io::Result<usize> {
    let assets_root = source_dir.join(content::ASSETS_DIR);
    if !assets_root.is_dir() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(&assets_root).into_iter().filter_map(|e| e.ok()) {
        let Ok(rel) = entry.path().strip_prefix(&assets_root) else {
            continue;
        };
        let target = output_dir.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    title: &str,
    css: &str,
    animate_once: bool,
    content: Markup,
    scripts: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body data-animate-once=(if animate_once { "true" } else { "false" }) {
                (content)
                (scripts)
            }
        }
    }
}

/// Renders the sticky header: logo, desktop nav, and the checkbox-driven
/// mobile menu.
pub fn site_header(profile: &Profile, nav: &[NavLink]) -> Markup {
    html! {
        div.progress-bar {}
        header.site-header {
            nav.site-nav {
                a.logo href="#home" {
                    span.logo-mark { (profile.initials) }
                    span { (profile.brand) }
                }
                ul.nav-links {
                    @for link in nav {
                        li {
                            a.nav-link data-section=(link.id) href={ "#" (link.id) } {
                                (link.label)
                            }
                        }
                    }
                }
                label.nav-hamburger for="nav-toggle" aria-label="Toggle menu" {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
            }
            input.nav-toggle type="checkbox" id="nav-toggle";
            div.nav-panel {
                ul {
                    @for link in nav {
                        li {
                            a.nav-link data-section=(link.id) href={ "#" (link.id) } {
                                (link.label)
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the hero: badge, revealed name, tagline, CTA links.
fn hero_section(profile: &Profile, nav: &[NavLink], letters: &[RevealedLetter]) -> Markup {
    let find = |id: &str| nav.iter().find(|link| link.id == id);

    html! {
        section id="home" class="hero" {
            div.section-inner {
                @if let Some(badge) = &profile.badge {
                    p.badge data-animate="fade-down" { (badge) }
                }
                h1 id="name-reveal" {
                    span.sr-only { (profile.name) }
                    @for letter in letters {
                        span.letter aria-hidden="true" style=(reveal::letter_style_attr(letter)) {
                            (letter.character)
                        }
                    }
                }
                @if let Some(tagline) = &profile.tagline {
                    p.tagline data-animate="fade-up" { (tagline) }
                }
                div.cta-row data-animate="fade-up" {
                    @if let Some(link) = find("projects") {
                        a.button.primary href={ "#" (link.id) } { "View " (link.label) }
                    }
                    @if let Some(link) = find("contact") {
                        a.button.ghost href={ "#" (link.id) } { (link.label) }
                    }
                }
            }
        }
    }
}

/// Renders the about section: photo, facts grid, markdown body, CV link.
fn about_section(
    profile: &Profile,
    heading: &str,
    body: Option<&Markup>,
    variants: &[ProfileVariant],
) -> Markup {
    let srcset = variants
        .iter()
        .map(|v| format!("{} {}w", v.filename, v.size))
        .collect::<Vec<_>>()
        .join(", ");

    html! {
        section id="about" {
            div.section-inner {
                div.about-layout {
                    div data-animate="fade-right" {
                        @if let Some(largest) = variants.last() {
                            img.profile-photo
                                src=(largest.filename)
                                srcset=(srcset)
                                sizes="13rem"
                                alt="Profile photo";
                        } @else {
                            div.profile-placeholder aria-hidden="true" { (profile.initials) }
                        }
                    }
                    div data-animate="fade-left" {
                        h2.section-heading { (heading) }
                        @if let Some(body) = body {
                            div.about-body { (body) }
                        }
                        @if !profile.facts.is_empty() {
                            div.facts-grid {
                                @for fact in &profile.facts {
                                    div.fact {
                                        strong { (fact.label) }
                                        br;
                                        (fact.value)
                                    }
                                }
                            }
                        }
                        @if let Some(cv) = &profile.cv {
                            a.cv-button href=(cv) download { "Download CV" }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the projects grid with colored tag chips.
fn projects_section(projects: &[Project], heading: &str) -> Markup {
    html! {
        section id="projects" {
            div.section-inner {
                h2.section-heading data-animate="fade-down" { (heading) }
                div.project-grid {
                    @for project in projects {
                        article.card data-animate="fade-up" {
                            h3 { (project.title) }
                            p { (project.description) }
                            @if !project.tags.is_empty() {
                                div.chip-row {
                                    @for tag in &project.tags {
                                        span class={ "chip chip-" (tag.color) } { (tag.label) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the skills grid plus the free-floating tag chips.
fn skills_section(skills: &[Skill], skill_tags: &[String], heading: &str) -> Markup {
    html! {
        section id="skills" {
            div.section-inner {
                h2.section-heading data-animate="fade-down" { (heading) }
                div.skill-grid {
                    @for (i, skill) in skills.iter().enumerate() {
                        div.skill-card
                            data-animate="zoom-in"
                            style=(format!("transition-delay: {}ms", i * 100)) {
                            span { (skill.name) }
                            span.category { (skill.category) }
                        }
                    }
                }
                @if !skill_tags.is_empty() {
                    div.chip-row data-animate="fade-up" {
                        @for tag in skill_tags {
                            span.chip.plain { (tag) }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the contact section. Entries with an `href` become links;
/// external links open in a new tab.
fn contact_section(entries: &[ContactEntry], heading: &str) -> Markup {
    let is_external = |href: &str| href.starts_with("http://") || href.starts_with("https://");

    html! {
        section id="contact" class="contact" {
            div.section-inner {
                h2.section-heading data-animate="fade-down" { (heading) }
                div.contact-row data-animate="fade-up" {
                    @for entry in entries {
                        @if let Some(href) = &entry.href {
                            a.contact-entry
                                href=(href)
                                target=[is_external(href).then_some("_blank")]
                                rel=[is_external(href).then_some("noopener noreferrer")] {
                                @if let Some(icon) = &entry.icon {
                                    img src=(icon) alt="";
                                }
                                (entry.text)
                            }
                        } @else {
                            div.contact-entry {
                                @if let Some(icon) = &entry.icon {
                                    img src=(icon) alt="";
                                }
                                (entry.text)
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Bare titled section for nav ids without a dedicated renderer. Keeps
/// the anchor and nav highlighting working.
fn generic_section(id: &str, heading: &str) -> Markup {
    html! {
        section id=(id) {
            div.section-inner {
                h2.section-heading data-animate="fade-down" { (heading) }
            }
        }
    }
}

fn site_footer(brand: &str) -> Markup {
    html! {
        footer.site-footer {
            p { "© " span { (brand) } ". All rights reserved." }
        }
    }
}

fn render_markdown(md: &str) -> Markup {
    let parser = Parser::new(md);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    PreEscaped(out)
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Render the whole page from manifest data. Pure: no I/O, fully
/// determined by its inputs.
pub fn render_page(
    manifest: &Manifest,
    variants: &[ProfileVariant],
    tracker: &SectionTracker,
    css: &str,
) -> Markup {
    let portfolio = &manifest.portfolio;
    let letters = reveal::reveal_sequence(&portfolio.profile.name, "var(--color-highlight)");
    let about_body = manifest.about.as_deref().map(render_markdown);

    let content = html! {
        (site_header(&portfolio.profile, &portfolio.nav))
        main {
            (hero_section(&portfolio.profile, &portfolio.nav, &letters))
            @for link in &portfolio.nav {
                @match link.id.as_str() {
                    "about" => {
                        (about_section(&portfolio.profile, &link.label, about_body.as_ref(), variants))
                    }
                    "projects" => { (projects_section(&portfolio.projects, &link.label)) }
                    "skills" => {
                        (skills_section(&portfolio.skills, &portfolio.skill_tags, &link.label))
                    }
                    "contact" => { (contact_section(&portfolio.contact, &link.label)) }
                    _ => { (generic_section(&link.id, &link.label)) }
                }
            }
        }
        (site_footer(&portfolio.profile.brand))
    };

    let scripts = html! {
        script { (PreEscaped(tracker::observer_script(tracker))) }
        script { (PreEscaped(ANIMATE_JS)) }
    };

    base_document(
        &portfolio.profile.brand,
        css,
        manifest.config.animation.once,
        content,
        scripts,
    )
}

// ============================================================================
// Tests
// ============================================================================

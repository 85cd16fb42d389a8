//! CLI output formatting for both pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary
//! display for every entity (section, project, contact entry) is its
//! semantic identity — heading and positional index — with source files
//! shown as secondary context via indented `Source:` lines.
//!
//! # Output Format
//!
//! ## Load
//!
//! ```text
//! Profile
//!     Neha Rajawat
//!     Photo: assets/profile.jpg
//!     CV: assets/cv.pdf
//!
//! Sections
//! 001 Hero
//! 002 About (2 facts)
//!     Source: about.md
//! 003 Projects (2 projects)
//!     001 Shopping-Cart App
//!     002 3D Maze Game
//! 004 Skills (3 skills, 2 tags)
//! 005 Contact (3 entries)
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Generate
//!
//! ```text
//! 001 Hero → #home
//! 002 About → #about
//! ...
//!
//! Copied 3 assets
//! Profile photo: profile-48.jpg, profile-96.jpg
//! Generated index.html
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::content::{ASSETS_DIR, Manifest};
use crate::generate::GenerateReport;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format an entity header: positional index + heading, with optional detail.
///
/// ```text
/// 003 Projects (2 projects)
/// 001 Hero
/// ```
fn entity_header(index: usize, heading: &str, detail: Option<String>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), heading, d),
        None => format!("{} {}", format_index(index), heading),
    }
}

/// Format a counted noun: `1 fact`, `2 projects`, `3 entries`.
fn counted(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

// ============================================================================
// Stage 1: Load output
// ============================================================================

/// Format load stage output showing the discovered portfolio structure.
pub fn format_load_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let portfolio = &manifest.portfolio;
    let profile = &portfolio.profile;
    let mut lines = Vec::new();

    lines.push("Profile".to_string());
    lines.push(format!("    {}", profile.brand));
    if let Some(photo) = &profile.photo {
        lines.push(format!("    Photo: {ASSETS_DIR}/{photo}"));
    }
    if let Some(cv) = &profile.cv {
        lines.push(format!("    CV: {ASSETS_DIR}/{cv}"));
    }

    lines.push(String::new());
    lines.push("Sections".to_string());
    lines.push(entity_header(1, "Hero", None));

    for (i, link) in portfolio.nav.iter().enumerate() {
        let index = i + 2;
        match link.id.as_str() {
            "about" => {
                let detail = (!profile.facts.is_empty())
                    .then(|| counted(profile.facts.len(), "fact", "facts"));
                lines.push(entity_header(index, &link.label, detail));
                if manifest.about.is_some() {
                    lines.push("    Source: about.md".to_string());
                }
            }
            "projects" => {
                lines.push(entity_header(
                    index,
                    &link.label,
                    Some(counted(portfolio.projects.len(), "project", "projects")),
                ));
                for (j, project) in portfolio.projects.iter().enumerate() {
                    lines.push(format!("    {} {}", format_index(j + 1), project.title));
                }
            }
            "skills" => {
                let mut detail = counted(portfolio.skills.len(), "skill", "skills");
                if !portfolio.skill_tags.is_empty() {
                    detail = format!("{}, {}", detail, counted(portfolio.skill_tags.len(), "tag", "tags"));
                }
                lines.push(entity_header(index, &link.label, Some(detail)));
            }
            "contact" => {
                lines.push(entity_header(
                    index,
                    &link.label,
                    Some(counted(portfolio.contact.len(), "entry", "entries")),
                ));
            }
            _ => lines.push(entity_header(index, &link.label, None)),
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    }
    if source_root.join(ASSETS_DIR).is_dir() {
        lines.push(format!("    {ASSETS_DIR}/"));
    }

    lines
}

/// Print load output to stdout.
pub fn print_load_output(manifest: &Manifest, source_root: &Path) {
    for line in format_load_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output mapping each section to its anchor.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, (id, heading)) in report.sections.iter().enumerate() {
        lines.push(format!(
            "{} {} → #{}",
            format_index(i + 1),
            heading,
            id
        ));
    }

    lines.push(String::new());
    if report.assets_copied > 0 {
        lines.push(format!("Copied {}", counted(report.assets_copied, "asset", "assets")));
    }
    if !report.profile_variants.is_empty() {
        let names: Vec<&str> = report
            .profile_variants
            .iter()
            .map(|v| v.filename.as_str())
            .collect();
        lines.push(format!("Profile photo: {}", names.join(", ")));
    }
    lines.push("Generated index.html".to_string());

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::imaging::ProfileVariant;
    use crate::test_helpers::setup_content;

    fn fixture() -> (tempfile::TempDir, Manifest) {
        let tmp = setup_content();
        let manifest = content::load(tmp.path()).unwrap();
        (tmp, manifest)
    }

    // =========================================================================
    // Load output
    // =========================================================================

    #[test]
    fn load_output_leads_with_profile() {
        let (tmp, manifest) = fixture();
        let lines = format_load_output(&manifest, tmp.path());
        assert_eq!(lines[0], "Profile");
        assert_eq!(lines[1], "    Neha Rajawat");
        assert!(lines.contains(&"    Photo: assets/profile.jpg".to_string()));
        assert!(lines.contains(&"    CV: assets/cv.pdf".to_string()));
    }

    #[test]
    fn load_output_lists_sections_with_counts() {
        let (tmp, manifest) = fixture();
        let lines = format_load_output(&manifest, tmp.path());
        assert!(lines.contains(&"001 Hero".to_string()));
        assert!(lines.contains(&"002 About (2 facts)".to_string()));
        assert!(lines.contains(&"003 Projects (2 projects)".to_string()));
        assert!(lines.contains(&"004 Skills (3 skills, 2 tags)".to_string()));
        assert!(lines.contains(&"005 Contact (3 entries)".to_string()));
    }

    #[test]
    fn load_output_lists_project_titles() {
        let (tmp, manifest) = fixture();
        let lines = format_load_output(&manifest, tmp.path());
        assert!(lines.contains(&"    001 Shopping-Cart App".to_string()));
        assert!(lines.contains(&"    002 3D Maze Game".to_string()));
    }

    #[test]
    fn load_output_shows_about_source() {
        let (tmp, manifest) = fixture();
        let lines = format_load_output(&manifest, tmp.path());
        assert!(lines.contains(&"    Source: about.md".to_string()));
    }

    #[test]
    fn load_output_config_section_reflects_files() {
        let (tmp, manifest) = fixture();
        let lines = format_load_output(&manifest, tmp.path());
        // No config.toml in the fixture, but assets/ exists.
        assert!(!lines.contains(&"    config.toml".to_string()));
        assert!(lines.contains(&"    assets/".to_string()));
    }

    #[test]
    fn load_output_singular_counts() {
        assert_eq!(counted(1, "fact", "facts"), "1 fact");
        assert_eq!(counted(2, "fact", "facts"), "2 facts");
        assert_eq!(counted(3, "entry", "entries"), "3 entries");
    }

    // =========================================================================
    // Generate output
    // =========================================================================

    fn report() -> GenerateReport {
        GenerateReport {
            sections: vec![
                ("home".to_string(), "Hero".to_string()),
                ("about".to_string(), "About".to_string()),
                ("contact".to_string(), "Contact".to_string()),
            ],
            assets_copied: 3,
            profile_variants: vec![ProfileVariant {
                size: 256,
                filename: "profile-256.jpg".to_string(),
            }],
        }
    }

    #[test]
    fn generate_output_maps_sections_to_anchors() {
        let lines = format_generate_output(&report());
        assert_eq!(lines[0], "001 Hero → #home");
        assert_eq!(lines[1], "002 About → #about");
        assert_eq!(lines[2], "003 Contact → #contact");
    }

    #[test]
    fn generate_output_reports_assets_and_variants() {
        let lines = format_generate_output(&report());
        assert!(lines.contains(&"Copied 3 assets".to_string()));
        assert!(lines.contains(&"Profile photo: profile-256.jpg".to_string()));
        assert!(lines.contains(&"Generated index.html".to_string()));
    }

    #[test]
    fn generate_output_omits_empty_asset_lines() {
        let mut r = report();
        r.assets_copied = 0;
        r.profile_variants.clear();
        let lines = format_generate_output(&r);
        assert!(!lines.iter().any(|l| l.starts_with("Copied")));
        assert!(!lines.iter().any(|l| l.starts_with("Profile photo")));
    }
}

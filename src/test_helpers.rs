//! Shared test utilities for the monofolio test suite.
//!
//! Builds isolated content directories in temp dirs so tests can load,
//! mutate, and generate without touching each other. The standard
//! fixture mirrors a real portfolio: full profile, four nav sections,
//! projects with tags, skills, contact entries, about body, and a
//! synthesized profile photo.

use std::path::Path;
use tempfile::TempDir;

use crate::content::{Manifest, Project};

/// Write `portfolio.toml` into a content root, creating it if needed.
pub fn write_portfolio(root: &Path, toml: &str) {
    std::fs::create_dir_all(root).unwrap();
    std::fs::write(root.join("portfolio.toml"), toml).unwrap();
}

/// Standard fixture portfolio, matching the data the renderer tests
/// assert against.
pub const FIXTURE_PORTFOLIO: &str = r#"
skill_tags = ["Problem-solving", "Full-stack"]

[profile]
name = "NEHA RAJAWAT"
brand = "Neha Rajawat"
initials = "NR"
badge = "Aspiring Software Engineer"
tagline = "B.E. in Computer Science with AI"
photo = "profile.jpg"
cv = "cv.pdf"

[[profile.facts]]
label = "Education"
value = "B.E. Computer Science with AI"

[[profile.facts]]
label = "Location"
value = "Greater Noida, India"

[[nav]]
id = "about"
label = "About"

[[nav]]
id = "projects"
label = "Projects"

[[nav]]
id = "skills"
label = "Skills"

[[nav]]
id = "contact"
label = "Contact"

[[projects]]
title = "Shopping-Cart App"
description = "ReactJS + Redux app with dynamic cart management."
tags = [
    { label = "React", color = "sky" },
    { label = "Redux", color = "emerald" },
]

[[projects]]
title = "3D Maze Game"
description = "Unity game with interactive levels and time challenges."
tags = [{ label = "Unity", color = "indigo" }]

[[skills]]
name = "HTML / CSS"
category = "Core"

[[skills]]
name = "Python"
category = "Backend / ML"

[[skills]]
name = "Unity"
category = "Game Dev"

[[contact]]
text = "nrajawat50@gmail.com"
href = "mailto:nrajawat50@gmail.com"
icon = "icons/email-icon.svg"

[[contact]]
text = "+1 (123) 456-7890"

[[contact]]
text = "LinkedIn Profile"
href = "https://www.linkedin.com/in/example"
"#;

/// Create a complete content directory in a temp dir.
///
/// Includes `portfolio.toml`, `about.md`, and an `assets/` tree with a
/// synthesized profile photo, a placeholder CV, and one icon, so asset
/// validation passes.
pub fn setup_content() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write_portfolio(root, FIXTURE_PORTFOLIO);
    std::fs::write(
        root.join("about.md"),
        "I enjoy solving real-world problems with **modern technologies**.\n",
    )
    .unwrap();

    let assets = root.join("assets");
    std::fs::create_dir_all(assets.join("icons")).unwrap();
    write_test_photo(&assets.join("profile.jpg"), 64, 48);
    std::fs::write(assets.join("cv.pdf"), b"%PDF-1.4 placeholder").unwrap();
    std::fs::write(
        assets.join("icons/email-icon.svg"),
        "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>",
    )
    .unwrap();

    tmp
}

/// Write a small gradient JPEG so imaging code has real pixels to chew on.
pub fn write_test_photo(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 4 % 256) as u8, (y * 4 % 256) as u8, 128])
    });
    img.save(path).unwrap();
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a project by title. Panics if not found.
pub fn find_project<'a>(manifest: &'a Manifest, title: &str) -> &'a Project {
    manifest
        .portfolio
        .projects
        .iter()
        .find(|p| p.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = manifest
                .portfolio
                .projects
                .iter()
                .map(|p| p.title.as_str())
                .collect();
            panic!("project '{title}' not found. Available: {titles:?}")
        })
}

/// All nav labels in document order.
pub fn nav_labels(manifest: &Manifest) -> Vec<&str> {
    manifest
        .portfolio
        .nav
        .iter()
        .map(|n| n.label.as_str())
        .collect()
}

//! Per-letter reveal styling for the hero name.
//!
//! The hero heading animates in one character at a time: each letter is
//! rendered as its own `<span>` carrying a staggered `transition-delay`,
//! and a small bootstrap script flips the container to `.revealed` on
//! load, letting the CSS transition play out per letter.
//!
//! The styling rules are fixed:
//!
//! - letter `i` is delayed by `i * 80ms` (zero-based, so the first
//!   letter starts immediately);
//! - the first 4 letters are painted in the highlight color instead of
//!   the text gradient;
//! - spaces get a fixed 16px width and inherit the surrounding color,
//!   since a gradient-clipped space renders as nothing.
//!
//! [`reveal_sequence`] is pure: same name in, same sequence out. It runs
//! once per generate, never at page runtime.

/// Delay between consecutive letters.
pub const STAGGER_MS: u32 = 80;

/// Number of leading letters painted in the highlight color.
pub const HIGHLIGHT_PREFIX: usize = 4;

/// Rendered width of a space letter (spaces collapse inside
/// `inline-block` spans, so they get an explicit width instead).
pub const SPACE_WIDTH: &str = "16px";

/// Style instructions for one revealed letter.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterStyle {
    /// Transition delay in milliseconds (`index * STAGGER_MS`).
    pub delay_ms: u32,
    /// Solid color replacing the text gradient, if any.
    pub color_override: Option<String>,
    /// Whether the letter is a space with a fixed width.
    pub fixed_width: bool,
}

/// One letter of the hero name with its computed style.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealedLetter {
    pub character: char,
    pub style: LetterStyle,
}

/// Compute the reveal sequence for a display name.
///
/// Output order matches input order exactly: `out[i].character` is the
/// i-th character of `name`, and `out[i].style.delay_ms == i * 80`.
/// `highlight` is the color applied to the leading letters (a CSS color
/// value, typically `var(--color-highlight)`).
///
/// A space inside the highlight prefix takes the space rule: fixed
/// width wins over the highlight color.
pub fn reveal_sequence(name: &str, highlight: &str) -> Vec<RevealedLetter> {
    name.chars()
        .enumerate()
        .map(|(i, character)| {
            let delay_ms = i as u32 * STAGGER_MS;
            let style = if character == ' ' {
                LetterStyle {
                    delay_ms,
                    color_override: Some("inherit".to_string()),
                    fixed_width: true,
                }
            } else if i < HIGHLIGHT_PREFIX {
                LetterStyle {
                    delay_ms,
                    color_override: Some(highlight.to_string()),
                    fixed_width: false,
                }
            } else {
                LetterStyle {
                    delay_ms,
                    color_override: None,
                    fixed_width: false,
                }
            };
            RevealedLetter { character, style }
        })
        .collect()
}

/// Render a letter's style as an inline CSS declaration list.
///
/// Always contains the transition delay; the color override and fixed
/// width are appended when present:
///
/// ```text
/// transition-delay: 160ms
/// transition-delay: 0ms; color: var(--color-highlight)
/// transition-delay: 320ms; width: 16px; color: inherit
/// ```
pub fn letter_style_attr(letter: &RevealedLetter) -> String {
    let mut css = format!("transition-delay: {}ms", letter.style.delay_ms);
    if letter.style.fixed_width {
        css.push_str("; width: ");
        css.push_str(SPACE_WIDTH);
    }
    if let Some(color) = &letter.style.color_override {
        css.push_str("; color: ");
        css.push_str(color);
    }
    css
}

//! Scroll-position navigation highlighting.
//!
//! The generated page highlights the nav link whose section currently
//! fills the viewport. The behavior is specified here as a plain state
//! machine, [`SectionTracker`], and shipped to the browser as a vanilla
//! `IntersectionObserver` script emitted by [`observer_script`] with the
//! same constants baked in. The Rust side is the reference: tests
//! exercise the state machine, and the script is generated from the
//! tracker's observed set so the two cannot drift apart.
//!
//! ## Activation rules
//!
//! - Exactly one section is active at a time; before any intersection
//!   report the active section is [`DEFAULT_SECTION`].
//! - A section counts as intersecting once at least
//!   [`INTERSECTION_THRESHOLD`] of its area is visible.
//! - Reports arrive in batches. Within a batch, every intersecting
//!   entry updates the active section in turn, so the last intersecting
//!   entry wins. Entries iterate in document order; "last wins" is a
//!   deliberate simplification, not a most-visible guarantee, and it is
//!   preserved as-is. A batch with no intersecting entry changes
//!   nothing.
//! - No debounce: fast scrolling may flip the active section several
//!   times in quick succession, and each flip is observable.
//!
//! ## Release
//!
//! Observation is registered once at startup and released exactly once
//! at teardown ([`SectionTracker::release`] here, `pagehide` →
//! `disconnect()` in the browser). Release is idempotent; events after
//! release are ignored.
//!
//! ## Degraded mode
//!
//! Environments without viewport observation get an inert highlight:
//! the active section stays at the default and nothing crashes. The
//! emitted script feature-detects `IntersectionObserver`; the state
//! machine models the same mode via [`SectionTracker::without_observer`].

/// Fraction of a section's area that must be visible to activate it.
pub const INTERSECTION_THRESHOLD: f64 = 0.6;

/// Active section before any intersection report (the hero).
pub const DEFAULT_SECTION: &str = "home";

/// One entry of an intersection report batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEvent {
    pub section_id: String,
    pub intersecting: bool,
}

impl IntersectionEvent {
    pub fn new(section_id: &str, intersecting: bool) -> Self {
        Self {
            section_id: section_id.to_string(),
            intersecting,
        }
    }
}

/// Tracks which page section is currently active.
///
/// The observed set is fixed at construction; the only mutable state is
/// the active section id and the released flag.
#[derive(Debug)]
pub struct SectionTracker {
    observed: Vec<String>,
    active: String,
    supported: bool,
    released: bool,
}

impl SectionTracker {
    /// Tracker over a fixed set of section ids, observer available.
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            observed: sections.into_iter().map(Into::into).collect(),
            active: DEFAULT_SECTION.to_string(),
            supported: true,
            released: false,
        }
    }

    /// Tracker in degraded mode: viewport observation is unavailable, so
    /// the active section stays at the default forever.
    pub fn without_observer<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            supported: false,
            ..Self::new(sections)
        }
    }

    /// The currently active section id.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// The fixed set of observed section ids, in document order.
    pub fn observed(&self) -> &[String] {
        &self.observed
    }

    /// Whether viewport observation is available.
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Apply one batch of intersection reports, in batch order.
    ///
    /// Each intersecting entry for an observed section sets the active
    /// section; the last one in the batch ends up winning. Entries for
    /// ids outside the observed set are ignored, as are all entries
    /// after release or in degraded mode.
    pub fn apply(&mut self, batch: &[IntersectionEvent]) {
        if self.released || !self.supported {
            return;
        }
        for event in batch {
            if event.intersecting && self.observed.iter().any(|id| id == &event.section_id) {
                self.active = event.section_id.clone();
            }
        }
    }

    /// Stop observing. Idempotent: further calls are no-ops, and no
    /// event mutates the active section afterwards.
    pub fn release(&mut self) {
        self.released = true;
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

/// Emit the browser-side observer script for a tracker's observed set.
///
/// The script mirrors the state machine exactly: same default section,
/// same threshold, same last-intersecting-entry-wins callback, observer
/// registered once per section and disconnected once on `pagehide`.
/// Without `IntersectionObserver` support it returns early, leaving the
/// nav highlight inert.
pub fn observer_script(tracker: &SectionTracker) -> String {
    let ids =
        serde_json::to_string(tracker.observed()).expect("section id list must serialize");
    format!(
        r#"(function () {{
  "use strict";
  var sections = {ids};
  var active = "{default_section}";
  if (!("IntersectionObserver" in window)) {{
    return;
  }}
  var links = document.querySelectorAll("a[data-section]");
  function highlight(id) {{
    active = id;
    links.forEach(function (link) {{
      link.classList.toggle("active", link.getAttribute("data-section") === active);
    }});
  }}
  var observer = new IntersectionObserver(function (entries) {{
    entries.forEach(function (entry) {{
      if (entry.isIntersecting) {{
        highlight(entry.target.id);
      }}
    }});
  }}, {{ threshold: {threshold} }});
  sections.forEach(function (id) {{
    var el = document.getElementById(id);
    if (el) {{
      observer.observe(el);
    }}
  }});
  var released = false;
  window.addEventListener("pagehide", function () {{
    if (!released) {{
      released = true;
      observer.disconnect();
    }}
  }});
}})();
"#,
        ids = ids,
        default_section = DEFAULT_SECTION,
        threshold = INTERSECTION_THRESHOLD,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: [&str; 5] = ["home", "about", "projects", "skills", "contact"];

    fn tracker() -> SectionTracker {
        SectionTracker::new(SECTIONS)
    }

    // =========================================================================
    // Initial state
    // =========================================================================

    #[test]
    fn starts_at_default_section() {
        assert_eq!(tracker().active(), "home");
    }

    #[test]
    fn observed_set_is_fixed_in_document_order() {
        assert_eq!(tracker().observed(), &SECTIONS);
    }

    // =========================================================================
    // Batch activation
    // =========================================================================

    #[test]
    fn intersecting_event_activates_section() {
        let mut t = tracker();
        t.apply(&[IntersectionEvent::new("about", true)]);
        assert_eq!(t.active(), "about");
    }

    #[test]
    fn last_intersecting_event_in_batch_wins() {
        let mut t = tracker();
        t.apply(&[
            IntersectionEvent::new("about", true),
            IntersectionEvent::new("projects", true),
        ]);
        assert_eq!(t.active(), "projects");
    }

    #[test]
    fn non_intersecting_events_change_nothing() {
        let mut t = tracker();
        t.apply(&[IntersectionEvent::new("about", true)]);
        t.apply(&[IntersectionEvent::new("about", false)]);
        assert_eq!(t.active(), "about");
    }

    #[test]
    fn empty_batch_changes_nothing() {
        let mut t = tracker();
        t.apply(&[]);
        assert_eq!(t.active(), "home");
    }

    #[test]
    fn batch_with_no_intersections_leaves_active_unchanged() {
        let mut t = tracker();
        t.apply(&[IntersectionEvent::new("skills", true)]);
        t.apply(&[
            IntersectionEvent::new("about", false),
            IntersectionEvent::new("projects", false),
        ]);
        assert_eq!(t.active(), "skills");
    }

    #[test]
    fn unknown_section_is_ignored() {
        let mut t = tracker();
        t.apply(&[IntersectionEvent::new("footer", true)]);
        assert_eq!(t.active(), "home");
    }

    #[test]
    fn rapid_flips_are_all_applied() {
        let mut t = tracker();
        t.apply(&[IntersectionEvent::new("about", true)]);
        t.apply(&[IntersectionEvent::new("projects", true)]);
        t.apply(&[IntersectionEvent::new("about", true)]);
        assert_eq!(t.active(), "about");
    }

    #[test]
    fn scroll_to_projects_scenario() {
        // "about" leaves the viewport in the same batch that "projects"
        // crosses the threshold.
        let mut t = tracker();
        t.apply(&[IntersectionEvent::new("about", true)]);
        t.apply(&[
            IntersectionEvent::new("about", false),
            IntersectionEvent::new("projects", true),
        ]);
        assert_eq!(t.active(), "projects");
    }

    // =========================================================================
    // Release
    // =========================================================================

    #[test]
    fn events_after_release_are_ignored() {
        let mut t = tracker();
        t.apply(&[IntersectionEvent::new("about", true)]);
        t.release();
        t.apply(&[IntersectionEvent::new("projects", true)]);
        assert_eq!(t.active(), "about");
    }

    #[test]
    fn release_is_idempotent() {
        let mut t = tracker();
        t.release();
        t.release();
        assert!(t.is_released());
        t.apply(&[IntersectionEvent::new("about", true)]);
        assert_eq!(t.active(), "home");
    }

    // =========================================================================
    // Degraded mode
    // =========================================================================

    #[test]
    fn without_observer_stays_at_default() {
        let mut t = SectionTracker::without_observer(SECTIONS);
        assert!(!t.is_supported());
        t.apply(&[IntersectionEvent::new("contact", true)]);
        assert_eq!(t.active(), "home");
    }

    // =========================================================================
    // Emitted script
    // =========================================================================

    #[test]
    fn script_bakes_in_observed_sections() {
        let js = observer_script(&tracker());
        assert!(js.contains(r#"["home","about","projects","skills","contact"]"#));
    }

    #[test]
    fn script_bakes_in_threshold_and_default() {
        let js = observer_script(&tracker());
        assert!(js.contains("threshold: 0.6"));
        assert!(js.contains(r#"var active = "home";"#));
    }

    #[test]
    fn script_feature_detects_observer() {
        let js = observer_script(&tracker());
        assert!(js.contains(r#"if (!("IntersectionObserver" in window))"#));
    }

    #[test]
    fn script_disconnects_once_on_pagehide() {
        let js = observer_script(&tracker());
        assert!(js.contains("pagehide"));
        assert!(js.contains("observer.disconnect()"));
        assert!(js.contains("if (!released)"));
    }

    #[test]
    fn script_has_no_tie_break_beyond_entry_order() {
        // The callback body iterates entries in order and applies every
        // intersecting one; there must be no intersectionRatio compare.
        let js = observer_script(&tracker());
        assert!(js.contains("entry.isIntersecting"));
        assert!(!js.contains("intersectionRatio"));
    }
}

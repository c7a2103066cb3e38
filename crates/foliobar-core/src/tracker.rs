//! Scroll-driven derived state.

use tracing::debug;

use crate::config::NavConfig;
use crate::section::{compute_active_section, is_scrolled};
use crate::state::ViewState;
use crate::viewport::Viewport;

/// Derives the "scrolled" flag and the active section from the viewport.
///
/// The tracker holds no subscription of its own; the caller invokes
/// [`ScrollTracker::observe`] from its scroll listener and once at mount.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    sections: Vec<String>,
    scroll_threshold: f64,
    detection_line: f64,
}

impl ScrollTracker {
    /// Create a tracker for the configured sections.
    #[must_use]
    pub fn new(config: &NavConfig) -> Self {
        Self {
            sections: config.section_ids().map(str::to_owned).collect(),
            scroll_threshold: config.scroll_threshold_px,
            detection_line: config.detection_line_px,
        }
    }

    /// Sections in the order they are checked.
    #[must_use]
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Read the viewport and update `state`. Returns `true` if anything
    /// changed.
    ///
    /// Sections missing from the document are skipped. When no section
    /// crosses the detection line the previous active section is kept.
    pub fn observe<V: Viewport + ?Sized>(&self, viewport: &V, state: &mut ViewState) -> bool {
        let offset = viewport.scroll_y();
        let mut changed = state.set_scrolled(is_scrolled(offset, self.scroll_threshold));

        let rects = self
            .sections
            .iter()
            .map(|id| (id.as_str(), viewport.section_rect(id)));

        match compute_active_section(rects, self.detection_line) {
            Some(active) => {
                if state.set_active_section(active) {
                    debug!(section = active, offset, "Active section changed");
                    changed = true;
                }
            }
            None => debug!(offset, "No section crosses the detection line"),
        }

        changed
    }
}

//! Sections of the single-page layout and active-section detection.
//!
//! Detection is a pure function over viewport-relative rectangles so it can
//! be exercised without a browser. The [`crate::tracker`] module feeds it
//! from a [`crate::viewport::Viewport`].

use serde::{Deserialize, Serialize};

/// Glyph shown next to a navigation label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NavIcon {
    /// House glyph, used for the landing section.
    Home,
}

impl NavIcon {
    /// SVG path data for a 24x24 view box.
    #[must_use]
    pub const fn svg_path(self) -> &'static str {
        match self {
            Self::Home => "M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z",
        }
    }
}

/// A navigation entry pointing at a section of the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    /// Text shown in the menu.
    pub label: String,
    /// DOM id of the target section.
    pub section_id: String,
    /// Optional glyph shown before the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<NavIcon>,
}

impl NavItem {
    /// Create an item without an icon.
    pub fn new(label: impl Into<String>, section_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            section_id: section_id.into(),
            icon: None,
        }
    }

    /// Attach an icon to the item.
    #[must_use]
    pub const fn with_icon(mut self, icon: NavIcon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// The site's sections, in priority order.
#[must_use]
pub fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "home").with_icon(NavIcon::Home),
        NavItem::new("About", "about"),
        NavItem::new("Services", "services"),
        NavItem::new("Portfolio", "portfolio"),
        NavItem::new("Projects", "projects"),
        NavItem::new("Testimonials", "testimonials"),
        NavItem::new("Contact", "contact"),
    ]
}

/// Vertical edges of a section, relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionRect {
    /// Distance from the viewport top to the section's top edge.
    pub top: f64,
    /// Distance from the viewport top to the section's bottom edge.
    pub bottom: f64,
}

impl SectionRect {
    /// Create a rectangle from its edges.
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether a horizontal line `line` px below the viewport top passes
    /// through this section. Both edges are inclusive.
    #[must_use]
    pub fn crosses(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Whether the page counts as scrolled for the header shadow.
#[must_use]
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Pick the section crossing the detection line.
///
/// Sections are visited in the given order and the first crossing one wins,
/// so overlapping short sections resolve to the one declared first. Entries
/// without a rectangle (element not in the document) are skipped. Returns
/// `None` when nothing crosses the line; callers keep their previous value.
pub fn compute_active_section<'a, I>(sections: I, detection_line: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, Option<SectionRect>)>,
{
    sections
        .into_iter()
        .find_map(|(id, rect)| rect.filter(|r| r.crosses(detection_line)).map(|_| id))
}

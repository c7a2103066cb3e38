//! Navigation configuration.
//!
//! The site ships with a hard-coded [`NavConfig::default`]. Embedders can
//! override it with JSON (typically via `include_str!`), which is validated
//! before use.

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::section::{NavItem, default_nav_items};

/// Scroll offset above which the header gets its shadow.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 20.0;
/// Distance below the viewport top used to pick the active section.
pub const DEFAULT_DETECTION_LINE_PX: f64 = 100.0;
/// Space reserved for the fixed header when scrolling to a section.
pub const DEFAULT_HEADER_OFFSET_PX: f64 = 80.0;
/// Delay between closing the menu and starting the scroll.
pub const DEFAULT_SCROLL_DELAY_MS: u64 = 10;
/// Section that is active before the first scroll observation.
pub const DEFAULT_SECTION: &str = "home";

/// Download link shown at the bottom of the mobile menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResumeLink {
    /// URL of the static asset.
    pub href: String,
    /// Link text.
    #[serde(default = "default_resume_label")]
    pub label: String,
}

fn default_resume_label() -> String {
    "Resume".to_string()
}

impl Default for ResumeLink {
    fn default() -> Self {
        Self {
            href: "/resume.pdf".to_string(),
            label: default_resume_label(),
        }
    }
}

/// Everything the navigation bar needs to know about the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavConfig {
    /// Brand text shown on the left; clicking it returns to the default section.
    pub brand: String,
    /// Navigation entries in priority order.
    pub items: Vec<NavItem>,
    /// Section that is active until the first scroll observation.
    pub default_section: String,
    /// Offset above which the page counts as scrolled.
    pub scroll_threshold_px: f64,
    /// Line below the viewport top used for active-section detection.
    pub detection_line_px: f64,
    /// Height reserved for the fixed header when scrolling to a section.
    pub header_offset_px: f64,
    /// Delay between closing the menu and scrolling.
    pub scroll_delay_ms: u64,
    /// Optional resume download link.
    pub resume: Option<ResumeLink>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            brand: "Bit Ai".to_string(),
            items: default_nav_items(),
            default_section: DEFAULT_SECTION.to_string(),
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            detection_line_px: DEFAULT_DETECTION_LINE_PX,
            header_offset_px: DEFAULT_HEADER_OFFSET_PX,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
            resume: Some(ResumeLink::default()),
        }
    }
}

impl NavConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(sections = config.items.len(), "Loaded navigation config");
        Ok(config)
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(Error::NoSections);
        }

        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            let id = item.section_id.as_str();
            if id.is_empty() || id.chars().any(char::is_whitespace) {
                return Err(Error::InvalidSectionId(item.section_id.clone()));
            }
            if !seen.insert(id) {
                return Err(Error::DuplicateSection(item.section_id.clone()));
            }
        }

        if !seen.contains(self.default_section.as_str()) {
            return Err(Error::UnknownDefaultSection(self.default_section.clone()));
        }

        for (field, value) in [
            ("scroll_threshold_px", self.scroll_threshold_px),
            ("detection_line_px", self.detection_line_px),
            ("header_offset_px", self.header_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidMeasurement { field, value });
            }
        }

        Ok(())
    }

    /// Section ids in declaration order.
    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.section_id.as_str())
    }

    /// Whether `id` is one of the declared sections.
    #[must_use]
    pub fn declares(&self, id: &str) -> bool {
        self.section_ids().any(|declared| declared == id)
    }

    /// Delay before the deferred scroll runs.
    #[must_use]
    pub const fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }
}

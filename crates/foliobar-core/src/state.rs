//! View state shared between the tracker, the menu and the view.

use crate::config::NavConfig;
use crate::menu::MenuState;

/// What the navigation bar currently shows.
///
/// Only [`crate::tracker::ScrollTracker`] and the menu synchronisation in
/// [`ViewState::sync_menu`] write to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    active_section: String,
    is_menu_open: bool,
    is_scrolled: bool,
}

impl ViewState {
    /// Initial state for a configuration: default section active, menu
    /// closed, page not scrolled.
    #[must_use]
    pub fn new(config: &NavConfig) -> Self {
        Self {
            active_section: config.default_section.clone(),
            is_menu_open: false,
            is_scrolled: false,
        }
    }

    /// Id of the section currently in view.
    #[must_use]
    pub fn active_section(&self) -> &str {
        &self.active_section
    }

    /// Whether the mobile menu is shown.
    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.is_menu_open
    }

    /// Whether the page is scrolled past the shadow threshold.
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    /// Mirror the menu controller's state. Returns `true` if it changed.
    pub fn sync_menu(&mut self, menu: MenuState) -> bool {
        let open = menu.is_open();
        let changed = self.is_menu_open != open;
        self.is_menu_open = open;
        changed
    }

    pub(crate) fn set_scrolled(&mut self, scrolled: bool) -> bool {
        let changed = self.is_scrolled != scrolled;
        self.is_scrolled = scrolled;
        changed
    }

    pub(crate) fn set_active_section(&mut self, id: &str) -> bool {
        if self.active_section == id {
            return false;
        }
        id.clone_into(&mut self.active_section);
        true
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&NavConfig::default())
    }
}

//! Mobile menu state machine.

use tracing::debug;

use crate::viewport::{ScrollLock, ScrollLockGuard};

/// Whether the mobile menu panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Panel hidden, page scrolls normally.
    #[default]
    Closed,
    /// Panel shown, page scroll locked.
    Open,
}

impl MenuState {
    /// Whether this is [`MenuState::Open`].
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Opens and closes the mobile menu, holding the page scroll lock exactly
/// while it is open.
///
/// Dropping the controller releases the lock.
#[derive(Debug)]
pub struct MenuController<L: ScrollLock + Clone> {
    lock: L,
    guard: Option<ScrollLockGuard<L>>,
}

impl<L: ScrollLock + Clone> MenuController<L> {
    /// Create a closed menu.
    pub const fn new(lock: L) -> Self {
        Self { lock, guard: None }
    }

    /// Current state.
    pub const fn state(&self) -> MenuState {
        if self.guard.is_some() {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    /// Whether the menu is open.
    pub const fn is_open(&self) -> bool {
        self.guard.is_some()
    }

    /// Open the menu. Returns `false` if it was already open.
    pub fn open(&mut self) -> bool {
        if self.guard.is_some() {
            return false;
        }
        self.guard = Some(ScrollLockGuard::acquire(self.lock.clone()));
        debug!("Menu opened");
        true
    }

    /// Close the menu. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        if self.guard.take().is_none() {
            return false;
        }
        debug!("Menu closed");
        true
    }

    /// Flip between open and closed and return the new state.
    pub fn toggle(&mut self) -> MenuState {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
        self.state()
    }
}

//! Seams between the navigation logic and the browser.
//!
//! The UI crate implements these traits with `web-sys`; tests use the
//! `mockall` mocks generated here.

use std::rc::Rc;

use tracing::debug;

use crate::section::SectionRect;

/// How a programmatic scroll should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animated scroll.
    #[default]
    Smooth,
    /// Jump straight to the target.
    Instant,
}

/// Read and drive the page's scroll position.
#[cfg_attr(test, mockall::automock)]
pub trait Viewport {
    /// Current vertical scroll offset in pixels.
    fn scroll_y(&self) -> f64;

    /// Viewport-relative edges of the section with the given id, if the
    /// element exists.
    fn section_rect(&self, id: &str) -> Option<SectionRect>;

    /// Document offset of the section's top edge, if the element exists.
    fn section_offset_top(&self, id: &str) -> Option<f64>;

    /// Scroll the page so its vertical offset becomes `top`.
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);
}

impl<T: Viewport + ?Sized> Viewport for Rc<T> {
    fn scroll_y(&self) -> f64 {
        (**self).scroll_y()
    }

    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        (**self).section_rect(id)
    }

    fn section_offset_top(&self, id: &str) -> Option<f64> {
        (**self).section_offset_top(id)
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        (**self).scroll_to(top, behavior);
    }
}

/// Suppress and restore page-level scrolling.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollLock {
    /// Prevent the page behind an overlay from scrolling.
    fn lock(&self);

    /// Restore normal page scrolling.
    fn unlock(&self);
}

impl<T: ScrollLock + ?Sized> ScrollLock for Rc<T> {
    fn lock(&self) {
        (**self).lock();
    }

    fn unlock(&self) {
        (**self).unlock();
    }
}

/// Holds the page scroll lock for as long as it lives.
///
/// The lock is released when the guard is dropped, whichever path drops it.
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    /// Lock page scrolling and return the guard that releases it.
    pub fn acquire(lock: L) -> Self {
        lock.lock();
        debug!("Page scroll locked");
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        self.lock.unlock();
        debug!("Page scroll released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;

    #[test]
    fn test_guard_locks_then_unlocks() {
        let mut seq = Sequence::new();
        let mut lock = MockScrollLock::new();
        lock.expect_lock().times(1).in_sequence(&mut seq).return_const(());
        lock.expect_unlock()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let guard = ScrollLockGuard::acquire(lock);
        drop(guard);
    }

    #[test]
    fn test_rc_viewport_delegates() {
        let mut viewport = MockViewport::new();
        viewport.expect_scroll_y().return_const(42.0);
        viewport
            .expect_section_offset_top()
            .withf(|id| id == "about")
            .return_const(Some(900.0));

        let shared = Rc::new(viewport);
        assert_eq!(shared.scroll_y(), 42.0);
        assert_eq!(shared.section_offset_top("about"), Some(900.0));
    }

    #[test]
    fn test_default_behavior_is_smooth() {
        assert_eq!(ScrollBehavior::default(), ScrollBehavior::Smooth);
    }
}

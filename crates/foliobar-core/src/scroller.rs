//! Smooth scrolling to a section after closing the menu.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::NavConfig;
use crate::menu::MenuController;
use crate::scheduler::Scheduler;
use crate::viewport::{ScrollBehavior, ScrollLock, Viewport};

/// Page offset that puts a section's top edge `header_offset` px below the
/// viewport top.
#[must_use]
pub fn scroll_target(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

/// Closes the menu and scrolls to a section once the close has started.
///
/// At most one scroll is pending at a time. The pending task is cancelled
/// when a newer navigation replaces it, on [`SmoothScroller::cancel_pending`],
/// and when the scroller is dropped.
pub struct SmoothScroller<V, S: Scheduler> {
    viewport: V,
    scheduler: S,
    header_offset: f64,
    delay: Duration,
    pending: Option<S::Handle>,
}

impl<V, S> SmoothScroller<V, S>
where
    V: Viewport + Clone + 'static,
    S: Scheduler,
{
    /// Create a scroller using the configured header offset and delay.
    pub fn new(viewport: V, scheduler: S, config: &NavConfig) -> Self {
        Self {
            viewport,
            scheduler,
            header_offset: config.header_offset_px,
            delay: config.scroll_delay(),
            pending: None,
        }
    }

    /// Close the menu, then scroll to `section_id` after the configured
    /// delay.
    ///
    /// The menu is closed even when the section does not exist. A missing
    /// section turns the deferred scroll into a no-op.
    pub fn navigate<L: ScrollLock + Clone>(
        &mut self,
        section_id: &str,
        menu: &mut MenuController<L>,
    ) {
        menu.close();

        // Replacing the handle cancels any scroll still waiting.
        self.pending = None;

        let viewport = self.viewport.clone();
        let header_offset = self.header_offset;
        let id = section_id.to_owned();
        let task = Box::new(move || match viewport.section_offset_top(&id) {
            Some(offset_top) => {
                let top = scroll_target(offset_top, header_offset);
                info!(section = %id, top, "Scrolling to section");
                viewport.scroll_to(top, ScrollBehavior::Smooth);
            }
            None => debug!(section = %id, "Section not found, skipping scroll"),
        });

        self.pending = Some(self.scheduler.schedule(self.delay, task));
    }

    /// Cancel the pending scroll, if any. Returns `true` if a handle was
    /// held.
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

impl<V, S: Scheduler> std::fmt::Debug for SmoothScroller<V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmoothScroller")
            .field("header_offset", &self.header_offset)
            .field("delay", &self.delay)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

//! Browser implementations of the core seams.
//!
//! Every DOM lookup degrades to "nothing there" instead of failing: a
//! missing window, document or element is treated like an absent section.

use std::time::Duration;

use foliobar_core::{ScrollBehavior, ScrollLock, Scheduler, SectionRect, Task, Viewport};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollToOptions};

fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// The page's window as seen by the navigation bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or_default()
    }

    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        let rect = element_by_id(id)?.get_bounding_client_rect();
        Some(SectionRect::new(rect.top(), rect.bottom()))
    }

    fn section_offset_top(&self, id: &str) -> Option<f64> {
        element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
            .map(|element| f64::from(element.offset_top()))
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Locks scrolling by toggling `overflow` on `document.body`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollLock;

impl BodyScrollLock {
    fn set_overflow(value: &str) {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };
        if let Err(e) = body.style().set_property("overflow", value) {
            leptos::logging::warn!("Failed to set body overflow to {}: {:?}", value, e);
        }
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        Self::set_overflow("hidden");
    }

    fn unlock(&self) {
        Self::set_overflow("auto");
    }
}

/// Schedules tasks with `setTimeout`. Dropping the returned [`Timeout`]
/// clears the timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}

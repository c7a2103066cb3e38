//! `Foliobar` Core Library
//!
//! Browser-independent logic behind the portfolio navigation bar:
//! - Active-section detection from section geometry
//! - Mobile menu state with page scroll locking
//! - Deferred smooth scrolling to a section, cancellable on teardown
//! - Navigation configuration with validation
//!
//! The browser is reached only through the [`viewport::Viewport`],
//! [`viewport::ScrollLock`] and [`scheduler::Scheduler`] traits, so every
//! piece can be tested on the host.
//!
//! ```rust,ignore
//! use foliobar_core::{NavConfig, ScrollTracker, ViewState};
//!
//! let config = NavConfig::default();
//! let tracker = ScrollTracker::new(&config);
//! let mut state = ViewState::new(&config);
//! tracker.observe(&viewport, &mut state);
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod scheduler;
pub mod scroller;
pub mod section;
pub mod state;
pub mod tracker;
pub mod viewport;

pub use config::{
    DEFAULT_DETECTION_LINE_PX, DEFAULT_HEADER_OFFSET_PX, DEFAULT_SCROLL_DELAY_MS,
    DEFAULT_SCROLL_THRESHOLD_PX, DEFAULT_SECTION, NavConfig, ResumeLink,
};
pub use error::{Error, Result};
pub use menu::{MenuController, MenuState};
pub use scheduler::{ManualHandle, ManualScheduler, Scheduler, Task};
pub use scroller::{SmoothScroller, scroll_target};
pub use section::{
    NavIcon, NavItem, SectionRect, compute_active_section, default_nav_items, is_scrolled,
};
pub use state::ViewState;
pub use tracker::ScrollTracker;
pub use viewport::{ScrollBehavior, ScrollLock, ScrollLockGuard, Viewport};

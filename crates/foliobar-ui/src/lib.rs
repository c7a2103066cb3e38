//! `Foliobar` UI - Leptos-based navigation bar.
//!
//! Browser adapters for the `foliobar-core` seams and the components that
//! render the bar.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod browser;
pub mod components;
pub mod theme;

pub use app::App;
pub use components::Navbar;

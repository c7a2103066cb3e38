//! UI components for the navigation bar.

mod layout;
mod mobile_menu;
mod navbar;
mod navigation;

pub use layout::PageSection;
pub use mobile_menu::{MenuToggle, MobileMenu, ResumeButton};
pub use navbar::{Navbar, NavbarContext, use_navbar};
pub use navigation::{
    DesktopNavLink, MobileNavLink, NavGlyph, animation_delay_style, icons, stagger_delay_ms,
};

//! Navigation links for the desktop bar and the mobile panel.

use foliobar_core::{NavIcon, NavItem};
use leptos::prelude::*;

use super::navbar::use_navbar;
use crate::theme::animation;

/// Delay before the mobile item at `index` starts its entrance animation.
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(animation::STAGGER_MS)
}

/// Inline style that applies an animation delay.
pub fn animation_delay_style(delay_ms: u32) -> String {
    format!("animation-delay: {delay_ms}ms")
}

/// Glyph for a navigation item.
#[component]
pub fn NavGlyph(
    /// The glyph to draw.
    icon: NavIcon,
    /// Width and height in pixels.
    #[prop(default = 16)]
    size: u32,
) -> impl IntoView {
    view! {
        <svg class="nav-icon" viewBox="0 0 24 24" width=size height=size fill="currentColor">
            <path d=icon.svg_path() />
        </svg>
    }
}

/// A link in the desktop bar. The active link gets an underline.
#[component]
pub fn DesktopNavLink(
    /// The item to render.
    item: NavItem,
) -> impl IntoView {
    let ctx = use_navbar();
    let id = item.section_id.clone();
    let active = Memo::new(move |_| ctx.active_section.with(|current| *current == id));
    let target = item.section_id;

    view! {
        <button
            class="nav-link"
            class:active=move || active.get()
            aria-current=move || active.get().then_some("page")
            on:click=move |_| ctx.navigate.run(target.clone())
        >
            <span class="nav-link-label">
                {item.icon.map(|icon| view! { <NavGlyph icon=icon /> })}
                {item.label}
            </span>
            <Show when=move || active.get()>
                <span class="nav-link-indicator"></span>
            </Show>
        </button>
    }
}

/// A link in the mobile panel. Items slide in one after another; the
/// active one shows a dot.
#[component]
pub fn MobileNavLink(
    /// The item to render.
    item: NavItem,
    /// Position in the list, used to stagger the entrance.
    index: usize,
) -> impl IntoView {
    let ctx = use_navbar();
    let id = item.section_id.clone();
    let active = Memo::new(move |_| ctx.active_section.with(|current| *current == id));
    let target = item.section_id;

    view! {
        <button
            class="mobile-link"
            class:active=move || active.get()
            style=animation_delay_style(stagger_delay_ms(index))
            on:click=move |_| ctx.navigate.run(target.clone())
        >
            {item.icon.map(|icon| view! { <NavGlyph icon=icon /> })}
            {item.label}
            <Show when=move || active.get()>
                <span class="mobile-link-dot"></span>
            </Show>
        </button>
    }
}

/// Icon paths used by the bar's own controls.
pub mod icons {
    /// Hamburger icon.
    pub const MENU: &str = "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z";
    /// Close icon.
    pub const CLOSE: &str = "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z";
    /// Download icon.
    pub const DOWNLOAD: &str = "M19 9h-4V3H9v6H5l7 7 7-7zM5 18v2h14v-2H5z";
}

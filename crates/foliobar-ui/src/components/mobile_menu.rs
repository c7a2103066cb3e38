//! Mobile menu toggle and collapsible panel.

use std::time::Duration;

use foliobar_core::{NavItem, ResumeLink};
use leptos::prelude::*;

use super::navbar::use_navbar;
use super::navigation::{MobileNavLink, animation_delay_style, icons, stagger_delay_ms};
use crate::theme::animation;

/// Hamburger button that opens and closes the mobile panel.
#[component]
pub fn MenuToggle() -> impl IntoView {
    let ctx = use_navbar();

    view! {
        <button
            class="menu-toggle"
            on:click=move |_| ctx.toggle_menu.run(())
            aria-label="Toggle menu"
            aria-expanded=move || ctx.is_menu_open.get().to_string()
        >
            <svg viewBox="0 0 24 24" width="28" height="28" fill="currentColor">
                {move || if ctx.is_menu_open.get() {
                    view! { <path d=icons::CLOSE /> }.into_any()
                } else {
                    view! { <path d=icons::MENU /> }.into_any()
                }}
            </svg>
        </button>
    }
}

/// Panel listing every section, shown while the menu is open.
///
/// The panel fades and expands in, and stays mounted for the length of its
/// exit animation after closing.
#[component]
pub fn MobileMenu(
    /// Sections to list.
    items: Vec<NavItem>,
    /// Download link shown after the sections.
    resume: Option<ResumeLink>,
) -> impl IntoView {
    let ctx = use_navbar();
    let resume_delay = stagger_delay_ms(items.len());

    view! {
        <AnimatedShow
            when=ctx.is_menu_open
            show_class="mobile-menu-enter"
            hide_class="mobile-menu-exit"
            hide_delay=Duration::from_millis(animation::PANEL_EXIT_MS)
        >
            <div class="mobile-menu">
                <div class="mobile-menu-glass"></div>
                <div class="mobile-menu-tint"></div>
                <div class="mobile-menu-items">
                    {items
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(index, item)| view! { <MobileNavLink item=item index=index /> })
                        .collect_view()}
                    {resume
                        .clone()
                        .map(|link| view! { <ResumeButton link=link delay_ms=resume_delay /> })}
                </div>
            </div>
        </AnimatedShow>
    }
}

/// Download link for the resume asset.
#[component]
pub fn ResumeButton(
    /// Where the asset lives and what to call it.
    link: ResumeLink,
    /// Entrance delay, so it arrives after the last section.
    #[prop(default = 0)]
    delay_ms: u32,
) -> impl IntoView {
    view! {
        <a
            class="resume-button"
            href=link.href
            download=""
            style=animation_delay_style(delay_ms)
        >
            <span>{link.label}</span>
            <svg class="resume-icon" viewBox="0 0 24 24" width="16" height="16" fill="currentColor">
                <path d=icons::DOWNLOAD />
            </svg>
        </a>
    }
}

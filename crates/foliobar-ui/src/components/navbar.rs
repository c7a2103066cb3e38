//! The fixed navigation bar.
//!
//! Owns the view state, the menu controller and the smooth scroller for as
//! long as it is mounted. The scroll listener, the scroll lock and any
//! pending scroll are all released when the component is cleaned up.

use foliobar_core::{
    MenuController, MenuState, NavConfig, ScrollTracker, SmoothScroller, ViewState,
};
use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;

use super::mobile_menu::{MenuToggle, MobileMenu};
use super::navigation::DesktopNavLink;
use crate::browser::{BodyScrollLock, BrowserViewport, TimeoutScheduler};

/// Navigation state and actions shared with the bar's children.
#[derive(Clone, Copy)]
pub struct NavbarContext {
    /// Id of the section currently in view.
    pub active_section: Memo<String>,
    /// Whether the mobile menu is open.
    pub is_menu_open: Memo<bool>,
    /// Whether the page is scrolled past the shadow threshold.
    pub is_scrolled: Memo<bool>,
    /// Close the menu and scroll to a section.
    pub navigate: Callback<String>,
    /// Open or close the mobile menu.
    pub toggle_menu: Callback<()>,
}

/// Hook to access the navigation context.
///
/// # Panics
/// Panics if called outside of a `Navbar`.
pub fn use_navbar() -> NavbarContext {
    expect_context::<NavbarContext>()
}

/// Fixed header with active-section highlighting, smooth-scroll links and a
/// collapsible mobile menu.
#[component]
pub fn Navbar(
    /// Sections, brand and scroll tuning. Defaults to the portfolio layout.
    #[prop(optional)]
    config: NavConfig,
) -> impl IntoView {
    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            leptos::logging::warn!("Invalid navigation config, using defaults: {}", e);
            NavConfig::default()
        }
    };

    let view_state = RwSignal::new(ViewState::new(&config));
    let menu = StoredValue::new(MenuController::new(BodyScrollLock));
    let scroller = StoredValue::new_local(SmoothScroller::new(
        BrowserViewport,
        TimeoutScheduler,
        &config,
    ));

    let active_section = Memo::new(move |_| view_state.with(|s| s.active_section().to_owned()));
    let is_menu_open = Memo::new(move |_| view_state.with(ViewState::is_menu_open));
    let is_scrolled = Memo::new(move |_| view_state.with(ViewState::is_scrolled));

    let sync_menu = move || {
        let state = menu
            .try_with_value(MenuController::state)
            .unwrap_or(MenuState::Closed);
        view_state.maybe_update(|s| s.sync_menu(state));
    };

    let toggle_menu = Callback::new(move |()| {
        menu.update_value(|m| {
            m.toggle();
        });
        sync_menu();
    });

    let navigate = Callback::new(move |section_id: String| {
        menu.update_value(|m| scroller.update_value(|s| s.navigate(&section_id, m)));
        sync_menu();
    });

    provide_context(NavbarContext {
        active_section,
        is_menu_open,
        is_scrolled,
        navigate,
        toggle_menu,
    });

    // Track scroll position: once after mount, then on every scroll event
    let tracker = ScrollTracker::new(&config);
    let observe = move || {
        view_state.maybe_update(|s| tracker.observe(&BrowserViewport, s));
    };
    let on_scroll = observe.clone();
    Effect::new(move |_| observe());
    let scroll_listener = window_event_listener(ev::scroll, move |_| on_scroll());

    on_cleanup(move || {
        scroll_listener.remove();
        scroller.update_value(|s| {
            s.cancel_pending();
        });
        menu.update_value(|m| {
            m.close();
        });
    });

    let home = config.default_section.clone();
    let NavConfig {
        brand,
        items,
        resume,
        ..
    } = config;
    let desktop_items = items.clone();

    view! {
        <div class="navbar-shell">
            <nav class="navbar" class:scrolled=move || is_scrolled.get() aria-label="Main navigation">
                <div class="navbar-glass"></div>
                <div class="navbar-tint"></div>
                <div class="navbar-reflection"></div>

                <div class="navbar-content">
                    <button class="navbar-brand" on:click=move |_| navigate.run(home.clone())>
                        {brand}
                    </button>

                    <div class="navbar-links">
                        {desktop_items
                            .into_iter()
                            .map(|item| view! { <DesktopNavLink item=item /> })
                            .collect_view()}
                    </div>

                    <div class="navbar-toggle">
                        <MenuToggle />
                    </div>
                </div>

                <MobileMenu items=items resume=resume />
            </nav>
        </div>
    }
}

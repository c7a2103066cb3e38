//! Integration tests for the navigation bar's scroll, menu and navigation
//! behaviour, driven against an in-memory page.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use foliobar_core::{
    ManualScheduler, MenuController, NavConfig, ScrollBehavior, ScrollLock, ScrollTracker,
    SectionRect, SmoothScroller, ViewState, Viewport,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("foliobar_core=debug")
        .with_test_writer()
        .try_init();
}

/// A page made of stacked sections with a scroll position.
#[derive(Debug, Default)]
struct FakePage {
    /// (id, document offset of top edge, height)
    sections: Vec<(&'static str, f64, f64)>,
    scroll_y: Cell<f64>,
    scrolls: RefCell<Vec<(f64, ScrollBehavior)>>,
    locked: Cell<bool>,
}

impl FakePage {
    /// The default sections stacked at 800px each, with `testimonials`
    /// missing from the document.
    fn portfolio() -> Rc<Self> {
        let ids = ["home", "about", "services", "portfolio", "projects", "contact"];
        let sections = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, i as f64 * 800.0, 800.0))
            .collect();
        Rc::new(Self {
            sections,
            ..Self::default()
        })
    }
}

impl Viewport for FakePage {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        let scroll = self.scroll_y.get();
        self.sections
            .iter()
            .find(|(section, _, _)| *section == id)
            .map(|(_, top, height)| SectionRect::new(top - scroll, top + height - scroll))
    }

    fn section_offset_top(&self, id: &str) -> Option<f64> {
        self.sections
            .iter()
            .find(|(section, _, _)| *section == id)
            .map(|(_, top, _)| *top)
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        self.scroll_y.set(top.max(0.0));
        self.scrolls.borrow_mut().push((top, behavior));
    }
}

impl ScrollLock for FakePage {
    fn lock(&self) {
        self.locked.set(true);
    }

    fn unlock(&self) {
        self.locked.set(false);
    }
}

#[test]
fn test_scrolled_flag_follows_threshold() {
    init_tracing();
    let page = FakePage::portfolio();
    let config = NavConfig::default();
    let tracker = ScrollTracker::new(&config);
    let mut state = ViewState::new(&config);

    for offset in [0.0, 10.0, 20.0] {
        page.scroll_y.set(offset);
        tracker.observe(&*page, &mut state);
        assert!(!state.is_scrolled(), "offset {offset} should not count");
    }
    for offset in [20.1, 21.0, 4000.0] {
        page.scroll_y.set(offset);
        tracker.observe(&*page, &mut state);
        assert!(state.is_scrolled(), "offset {offset} should count");
    }
}

#[test]
fn test_active_section_tracks_scroll() {
    init_tracing();
    let page = FakePage::portfolio();
    let config = NavConfig::default();
    let tracker = ScrollTracker::new(&config);
    let mut state = ViewState::new(&config);

    tracker.observe(&*page, &mut state);
    assert_eq!(state.active_section(), "home");

    // about spans 800..1600; the detection line sits at scroll + 100.
    page.scroll_y.set(800.0);
    tracker.observe(&*page, &mut state);
    assert_eq!(state.active_section(), "about");

    // Line at 3300 lands in projects (3200..4000).
    page.scroll_y.set(3200.0);
    tracker.observe(&*page, &mut state);
    assert_eq!(state.active_section(), "projects");
}

#[test]
fn test_active_section_kept_below_last_section() {
    let page = FakePage::portfolio();
    let config = NavConfig::default();
    let tracker = ScrollTracker::new(&config);
    let mut state = ViewState::new(&config);

    page.scroll_y.set(4000.0);
    tracker.observe(&*page, &mut state);
    assert_eq!(state.active_section(), "contact");

    // Past the end of the page nothing crosses the line.
    page.scroll_y.set(10_000.0);
    tracker.observe(&*page, &mut state);
    assert_eq!(state.active_section(), "contact");
}

#[test]
fn test_menu_toggle_locks_page() {
    let page = FakePage::portfolio();
    let mut menu = MenuController::new(Rc::clone(&page));
    let mut state = ViewState::default();

    menu.toggle();
    state.sync_menu(menu.state());
    assert!(state.is_menu_open());
    assert!(page.locked.get());

    menu.toggle();
    state.sync_menu(menu.state());
    assert!(!state.is_menu_open());
    assert!(!page.locked.get());

    menu.toggle();
    assert!(page.locked.get());
}

#[test]
fn test_navigate_from_open_menu() {
    init_tracing();
    let page = FakePage::portfolio();
    let scheduler = ManualScheduler::new();
    let config = NavConfig::default();
    let mut menu = MenuController::new(Rc::clone(&page));
    let mut scroller = SmoothScroller::new(Rc::clone(&page), scheduler.clone(), &config);

    menu.open();
    scroller.navigate("services", &mut menu);

    // The menu closes before anything scrolls.
    assert!(!menu.is_open());
    assert!(!page.locked.get());
    assert!(page.scrolls.borrow().is_empty());

    scheduler.advance(Duration::from_millis(10));
    assert_eq!(
        *page.scrolls.borrow(),
        [(1600.0 - 80.0, ScrollBehavior::Smooth)]
    );
    assert_eq!(page.scroll_y.get(), 1520.0);
}

#[test]
fn test_navigate_to_missing_section_leaves_scroll() {
    let page = FakePage::portfolio();
    page.scroll_y.set(640.0);
    let scheduler = ManualScheduler::new();
    let config = NavConfig::default();
    let mut menu = MenuController::new(Rc::clone(&page));
    let mut scroller = SmoothScroller::new(Rc::clone(&page), scheduler.clone(), &config);

    menu.open();
    scroller.navigate("testimonials", &mut menu);
    assert!(!menu.is_open());

    scheduler.advance(Duration::from_millis(10));
    assert!(page.scrolls.borrow().is_empty());
    assert_eq!(page.scroll_y.get(), 640.0);
}

#[test]
fn test_teardown_with_pending_scroll() {
    let page = FakePage::portfolio();
    let scheduler = ManualScheduler::new();
    let config = NavConfig::default();
    let mut menu = MenuController::new(Rc::clone(&page));
    let mut scroller = SmoothScroller::new(Rc::clone(&page), scheduler.clone(), &config);

    menu.open();
    scroller.navigate("contact", &mut menu);
    menu.open();
    assert!(page.locked.get());

    // Unmount: both owners go away before the timer fires.
    drop(scroller);
    drop(menu);
    assert!(!page.locked.get());

    assert_eq!(scheduler.advance(Duration::from_millis(10)), 0);
    assert!(page.scrolls.borrow().is_empty());
}

#[test]
fn test_custom_config_from_json() {
    let config = NavConfig::from_json(
        r#"{
            "items": [
                {"label": "Top", "section_id": "home"},
                {"label": "Work", "section_id": "projects"}
            ],
            "header_offset_px": 64,
            "detection_line_px": 0
        }"#,
    )
    .unwrap();
    assert_eq!(config.items.len(), 2);

    let page = FakePage::portfolio();
    let scheduler = ManualScheduler::new();
    let tracker = ScrollTracker::new(&config);
    let mut state = ViewState::new(&config);
    let mut menu = MenuController::new(Rc::clone(&page));
    let mut scroller = SmoothScroller::new(Rc::clone(&page), scheduler.clone(), &config);

    scroller.navigate("projects", &mut menu);
    scheduler.advance(config.scroll_delay());
    assert_eq!(page.scroll_y.get(), 3200.0 - 64.0);

    // "about" now crosses the line but is not declared, so it is ignored.
    page.scroll_y.set(900.0);
    tracker.observe(&*page, &mut state);
    assert_eq!(state.active_section(), "home");
}

//! Main application component.

use foliobar_core::NavConfig;
use leptos::prelude::*;

use crate::components::{Navbar, PageSection};
use crate::theme::generate_css_variables;

/// Main application component: the navigation bar over one section per
/// navigation item.
#[component]
pub fn App() -> impl IntoView {
    let css_vars = generate_css_variables();
    let config = NavConfig::default();
    let sections = config.items.clone();

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/navbar.css")}</style>
        <Navbar config=config />
        <main class="page">
            {sections
                .into_iter()
                .map(|item| view! { <PageSection id=item.section_id title=item.label /> })
                .collect_view()}
        </main>
    }
}

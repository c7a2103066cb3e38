//! Page sections the navigation bar scrolls between.

use leptos::prelude::*;

/// A full-height section of the single-page layout.
///
/// The `id` is what the navigation bar looks up, so it must match the
/// item's `section_id`.
#[component]
pub fn PageSection(
    /// DOM id of the section.
    #[prop(into)]
    id: String,
    /// Heading shown at the top of the section.
    #[prop(into)]
    title: String,
    /// Section body.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <section id=id class="page-section">
            <div class="page-section-header">
                <h2>{title}</h2>
            </div>
            <div class="page-section-body">
                {children.map(|children| children())}
            </div>
        </section>
    }
}


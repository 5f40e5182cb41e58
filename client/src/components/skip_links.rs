//! Keyboard skip-links to the main content and navigation landmarks.
//!
//! The stylesheet keeps `.skip-link` off-screen until it receives focus.

#[cfg(test)]
#[path = "skip_links_test.rs"]
mod skip_links_test;

use leptos::prelude::*;

/// `(href, label)` pairs, in tab order.
const SKIP_TARGETS: [(&str, &str); 2] = [
    ("#main-content", "Skip to main content"),
    ("#navigation", "Skip to navigation"),
];

#[component]
pub fn SkipLinks() -> impl IntoView {
    view! {
        <div class="skip-links">
            {SKIP_TARGETS
                .iter()
                .map(|(href, label)| view! { <a class="skip-link" href=*href>{*label}</a> })
                .collect_view()}
        </div>
    }
}

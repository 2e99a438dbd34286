//! Inline SVG glyphs for the nav buttons.
//!
//! Stroke icons on a 24x24 grid, drawn with `currentColor` so they pick up the
//! surrounding text colour.

use leptos::prelude::*;

/// Renders a stroked SVG icon from one or more path data strings.
#[component]
pub fn Icon(
    /// `d` attributes, drawn in order
    paths: &'static [&'static str],
    /// Extra CSS classes (sizing is usually done here)
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            {paths.iter().copied().map(|d| view! { <path d=d></path> }).collect_view()}
        </svg>
    }
}

/// GitHub octocat mark
pub const ICON_GITHUB: &[&str] = &[
    "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
    "M9 18c-4.51 2-5-2-7-2",
];

/// Coffee cup with steam
pub const ICON_COFFEE: &[&str] = &[
    "M17 8h1a4 4 0 1 1 0 8h-1",
    "M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4Z",
    "M6 2v2",
    "M10 2v2",
    "M14 2v2",
];

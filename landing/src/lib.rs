//! Landing page for `ur-commit-mentor`, rendered client-side with Leptos.
//!
//! The page is static copy plus one interaction: copying the install command
//! to the clipboard, with the button reading "Copied!" for two seconds after
//! a successful write.
//!
//! - [`content`] - every literal the page shows
//! - [`copy_state`] - the timed copied flag
//! - [`clipboard`] - fallible clipboard writes
//! - [`logging`] - console subscriber setup
//! - [`sections`] - Leptos components, one per visual block

pub mod clipboard;
pub mod content;
pub mod copy_state;
pub mod logging;
pub mod sections;

use leptos::prelude::*;
use sections::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-white dark:bg-gray-900 text-gray-900 dark:text-white">
            <Backdrop />
            <Nav />
            <div class="relative flex-1 max-w-7xl mx-auto px-3 sm:px-6 lg:px-8 pt-24 sm:pt-36">
                <main class="flex flex-col items-center justify-center text-center">
                    <Hero />
                    <InstallSection />
                    <Features />
                </main>
            </div>
        </div>
    }
}

/// Mount [`App`] into `<body>`.
pub fn mount() {
    leptos::mount::mount_to_body(App);
}

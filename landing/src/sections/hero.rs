use crate::content::{SUBTITLE, TITLE};
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="space-y-4 sm:space-y-6 mb-12 sm:mb-16">
            <h1 class="text-4xl sm:text-5xl md:text-7xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-gray-900 via-gray-700 to-gray-900 dark:from-white dark:via-gray-300 dark:to-white pb-2">
                {TITLE}
            </h1>
            <p class="text-base sm:text-lg md:text-2xl max-w-3xl mx-auto mt-4 sm:mt-6 text-gray-600 dark:text-gray-300">
                {SUBTITLE}
            </p>
        </div>
    }
}

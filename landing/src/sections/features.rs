use crate::content::{FEATURES, FeatureEntry};
use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-8 w-full pb-12 sm:pb-0">
            {FEATURES
                .into_iter()
                .map(|feature| view! { <FeatureCard feature=feature /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn FeatureCard(feature: FeatureEntry) -> impl IntoView {
    view! {
        <div class="group p-8 border border-gray-200/50 dark:border-gray-700/50 rounded-2xl hover:border-gray-300 dark:hover:border-gray-600 transition-all duration-300 hover:shadow-lg bg-white/50 dark:bg-gray-800/50 backdrop-blur-sm hover:-translate-y-1">
            <h3 class="text-xl font-semibold mb-3 group-hover:text-gray-900 dark:group-hover:text-white transition-colors">
                {feature.title}
            </h3>
            <p class="text-gray-600 dark:text-gray-300">{feature.description}</p>
        </div>
    }
}

use leptos::prelude::*;

/// Blurred gradient blobs over a faint grid, behind everything else.
#[component]
pub fn Backdrop() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none opacity-30 sm:opacity-60 min-h-screen">
            <div class="absolute -top-1/2 -left-1/2 w-[200%] sm:w-full h-full bg-gradient-to-br from-gray-100 to-transparent dark:from-gray-800 dark:to-transparent rounded-full blur-3xl"></div>
            <div class="absolute -bottom-1/2 -right-1/2 w-[200%] sm:w-full h-full bg-gradient-to-tl from-gray-100 to-transparent dark:from-gray-800 dark:to-transparent rounded-full blur-3xl"></div>
            <div class="absolute inset-0 bg-[linear-gradient(to_right,#80808012_1px,transparent_1px),linear-gradient(to_bottom,#80808012_1px,transparent_1px)] bg-[size:14px_14px] sm:bg-[size:24px_24px] dark:bg-[linear-gradient(to_right,#ffffff12_1px,transparent_1px),linear-gradient(to_bottom,#ffffff12_1px,transparent_1px)]"></div>
        </div>
    }
}

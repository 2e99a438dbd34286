// ur-commit-mentor Landing Page, Leptos 0.8 edition

fn main() {
    console_error_panic_hook::set_once();
    landing::logging::init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting landing page");
    landing::mount();
}

// Landing page sections
// ur-commit-mentor, Leptos 0.8 edition

mod backdrop;
mod features;
mod hero;
mod icons;
mod install;
mod nav;

pub use backdrop::Backdrop;
pub use features::Features;
pub use hero::Hero;
pub use install::InstallSection;
pub use nav::Nav;

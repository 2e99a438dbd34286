use super::icons::{ICON_COFFEE, ICON_GITHUB, Icon};
use crate::content::{
    AUTHOR_LINK, DONATION_LINK, ExternalLink, LINK_REL, LINK_TARGET, REPOSITORY_LINK,
};
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="absolute w-full z-10 border-b border-gray-200/50 dark:border-gray-800/50">
            <div class="max-w-7xl mx-auto px-3 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-14 sm:h-16">
                    <p class="text-sm sm:text-base text-center">
                        "Made with "
                        <span class="text-red-500 animate-pulse">"❤️"</span>
                        " by "
                        <OutboundLink
                            link=AUTHOR_LINK
                            class="font-medium hover:text-gray-900 dark:hover:text-white transition-colors hover:underline"
                        >
                            {AUTHOR_LINK.label}
                        </OutboundLink>
                    </p>

                    <div class="flex items-center gap-2 sm:gap-4">
                        <OutboundLink
                            link=REPOSITORY_LINK
                            class="flex items-center gap-2 px-4 py-2 bg-black text-white rounded-lg hover:bg-black/90 transition-colors"
                        >
                            <Icon paths=ICON_GITHUB />
                            <span class="hidden sm:inline font-medium">{REPOSITORY_LINK.label}</span>
                        </OutboundLink>
                        <OutboundLink
                            link=DONATION_LINK
                            class="flex items-center gap-2 px-4 py-2 bg-[#FFDD00] text-black rounded-lg hover:bg-[#FFDD00]/90 transition-colors"
                        >
                            <Icon paths=ICON_COFFEE />
                            <span class="hidden sm:inline font-medium">{DONATION_LINK.label}</span>
                        </OutboundLink>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Anchor that opens in a new tab without handing it `window.opener`.
#[component]
fn OutboundLink(link: ExternalLink, class: &'static str, children: Children) -> impl IntoView {
    view! {
        <a href={link.href} target=LINK_TARGET rel=LINK_REL title={link.title} class=class>
            {children()}
        </a>
    }
}

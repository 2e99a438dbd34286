//! Static page copy: hero text, install command, feature grid and outbound links.
//!
//! Everything the page renders that is not reactive state lives here, so the
//! sections stay pure markup and the literals can be checked without a browser.

/// Page headline.
pub const TITLE: &str = "UR Commit Mentor";

/// One-line pitch under the headline.
pub const SUBTITLE: &str =
    "AI-powered code review insights for better commit messages using Claude AI";

/// Label above the install snippet.
pub const INSTALL_PROMPT: &str = "Install using Cargo:";

/// Command shown in the snippet and written to the clipboard on copy.
pub const INSTALL_COMMAND: &str = "cargo install ur-commit-mentor";

/// Browsing context every outbound link opens in.
pub const LINK_TARGET: &str = "_blank";

/// Keeps the new tab from getting a handle on this page.
pub const LINK_REL: &str = "noopener noreferrer";

/// One advertised capability of the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureEntry {
    pub title: &'static str,
    pub description: &'static str,
}

/// Feature grid, rendered in this order.
pub const FEATURES: [FeatureEntry; 3] = [
    FeatureEntry {
        title: "Pre-Push Analysis",
        description: "Review your commits before pushing to catch potential issues",
    },
    FeatureEntry {
        title: "AI-Powered Insights",
        description: "Get intelligent suggestions about code quality and best practices",
    },
    FeatureEntry {
        title: "Quick Feedback",
        description: "Understand the impact of your changes without waiting for human review",
    },
];

/// A link leaving the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Tooltip, when the visible label may be hidden.
    pub title: Option<&'static str>,
}

/// Author credit in the nav.
pub const AUTHOR_LINK: ExternalLink = ExternalLink {
    label: "@ddoemonn",
    href: "https://github.com/ddoemonn",
    title: None,
};

/// Source repository button.
pub const REPOSITORY_LINK: ExternalLink = ExternalLink {
    label: "Repository",
    href: "https://github.com/ddoemonn/ur-commit-mentor",
    title: None,
};

/// Donation button.
pub const DONATION_LINK: ExternalLink = ExternalLink {
    label: "Buy me a coffee",
    href: "https://www.buymeacoffee.com/ozergklp",
    title: Some("Buy me a coffee"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn feature_grid_has_three_entries_in_order() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec!["Pre-Push Analysis", "AI-Powered Insights", "Quick Feedback"]
        );
    }

    #[test]
    fn feature_descriptions_are_verbatim() {
        assert_eq!(
            FEATURES[0].description,
            "Review your commits before pushing to catch potential issues"
        );
        assert_eq!(
            FEATURES[1].description,
            "Get intelligent suggestions about code quality and best practices"
        );
        assert_eq!(
            FEATURES[2].description,
            "Understand the impact of your changes without waiting for human review"
        );
    }

    #[test]
    fn install_command_targets_crates_io_package() {
        assert_eq!(INSTALL_COMMAND, "cargo install ur-commit-mentor");
        assert!(REPOSITORY_LINK.href.ends_with("/ur-commit-mentor"));
    }

    #[test]
    fn nav_links_point_at_exact_urls() {
        assert_eq!(AUTHOR_LINK.href, "https://github.com/ddoemonn");
        assert_eq!(
            REPOSITORY_LINK.href,
            "https://github.com/ddoemonn/ur-commit-mentor"
        );
        assert_eq!(DONATION_LINK.href, "https://www.buymeacoffee.com/ozergklp");
    }

    #[test]
    fn nav_links_open_detached_tab() {
        assert_eq!(LINK_TARGET, "_blank");
        let rel: Vec<_> = LINK_REL.split_whitespace().collect();
        assert!(rel.contains(&"noopener"));
        assert!(rel.contains(&"noreferrer"));
    }

    #[test]
    fn only_donation_link_has_tooltip() {
        assert_eq!(AUTHOR_LINK.title, None);
        assert_eq!(REPOSITORY_LINK.title, None);
        assert_eq!(DONATION_LINK.title, Some("Buy me a coffee"));
    }
}

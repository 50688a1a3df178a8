//! Site pages and their navigation metadata.

use serde::{Deserialize, Serialize};

/// The closed set of pages the site can show.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Landing page with the rotating hero banner
    #[default]
    Home,
    /// Browsable pet listing
    Pets,
    /// Member registration form
    Register,
    /// Pet surrender form
    Release,
    /// Adoption request form
    Adopt,
    /// Contact form and shelter details
    Contact,
}

impl Page {
    /// Pages in navigation order.
    pub const NAV: [Page; 6] = [
        Page::Home,
        Page::Pets,
        Page::Register,
        Page::Release,
        Page::Adopt,
        Page::Contact,
    ];

    /// Route path for the page.
    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Pets => "/pets",
            Page::Register => "/register",
            Page::Release => "/release",
            Page::Adopt => "/adopt",
            Page::Contact => "/contact",
        }
    }

    /// Navigation label.
    pub const fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Pets => "Available Pets",
            Page::Register => "Register",
            Page::Release => "Release a Pet",
            Page::Adopt => "Adopt a Pet",
            Page::Contact => "Contact Us",
        }
    }

    /// Navigation icon.
    pub const fn icon(self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::Pets => "🐾",
            Page::Register => "👤",
            Page::Release => "📋",
            Page::Adopt => "💗",
            Page::Contact => "✉️",
        }
    }

    /// Resolve a location path to a page. Anything outside the known
    /// set falls back to the home page instead of erroring.
    pub fn from_path(path: &str) -> Page {
        Page::NAV
            .into_iter()
            .find(|page| page.path() == path)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_round_trip() {
        for page in Page::NAV {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        assert_eq!(Page::from_path("/admin"), Page::Home);
        assert_eq!(Page::from_path("/pets/7"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
    }
}

//! Site pages and their URL fragments

use serde::{Deserialize, Serialize};

/// A top-level page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Services,
    About,
    Contact,
}

impl Page {
    /// All pages in navigation order
    pub const ALL: [Page; 4] = [Page::Home, Page::Services, Page::About, Page::Contact];

    /// Fragment used in links (`#services`) and in the location hash
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Services => "services",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar and footer
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Services => "Services",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }

    /// `href` for an in-page link to this page
    pub fn href(&self) -> String {
        format!("#{}", self.slug())
    }

    /// Resolve a slug, fragment or path to a page.
    ///
    /// Accepts `services`, `#services`, `/services` and any casing.
    /// Anything unrecognized (including the empty string) is the home page.
    pub fn from_slug(raw: &str) -> Page {
        let slug = raw.trim().trim_start_matches(['#', '/']).trim_end_matches('/');
        Page::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(slug))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip_for_every_page() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), page);
        }
    }

    #[test]
    fn test_from_slug_accepts_fragments_and_paths() {
        assert_eq!(Page::from_slug("#services"), Page::Services);
        assert_eq!(Page::from_slug("/about"), Page::About);
        assert_eq!(Page::from_slug("/contact/"), Page::Contact);
        assert_eq!(Page::from_slug("  ABOUT "), Page::About);
    }

    #[test]
    fn test_from_slug_falls_back_to_home() {
        assert_eq!(Page::from_slug(""), Page::Home);
        assert_eq!(Page::from_slug("#"), Page::Home);
        assert_eq!(Page::from_slug("pricing"), Page::Home);
        assert_eq!(Page::from_slug("#services/extra"), Page::Home);
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_href() {
        assert_eq!(Page::Contact.href(), "#contact");
    }

    #[test]
    fn test_serde_uses_slugs() {
        let json = serde_json::to_string(&Page::Services).unwrap();
        assert_eq!(json, "\"services\"");
    }
}

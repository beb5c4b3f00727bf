//! The closed set of pages the site can show.
//!
//! Every page has a URL slug; [`PageId::resolve`] is total, so a path that
//! names no page lands on [`PageId::NotFound`] instead of rendering nothing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageId {
    Home,
    Features,
    Pricing,
    Compare,
    Integrations,
    MobileApps,
    Security,
    Changelog,
    Roadmap,
    About,
    Careers,
    Press,
    Partners,
    Affiliates,
    Testimonials,
    Contact,
    Blog,
    HelpCenter,
    Developers,
    Faq,
    Glossary,
    Status,
    Terms,
    Privacy,
    Cookies,
    Refunds,
    Disclaimer,
    AcceptableUse,
    DataProcessing,
    Accessibility,
    Imprint,
    SignIn,
    SignUp,
    Dashboard,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageGroup {
    Product,
    Company,
    Resources,
    Legal,
    Account,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no page at `{0}`")]
pub struct ParsePageError(pub String);

struct PageMeta {
    id: PageId,
    slug: &'static str,
    title: &'static str,
    group: PageGroup,
}

const fn meta(id: PageId, slug: &'static str, title: &'static str, group: PageGroup) -> PageMeta {
    PageMeta { id, slug, title, group }
}

// Same order as the enum; `PageId::meta` indexes by discriminant.
static PAGES: [PageMeta; 35] = [
    meta(PageId::Home, "", "Portfolio tracking that adds up", PageGroup::Product),
    meta(PageId::Features, "features", "Features", PageGroup::Product),
    meta(PageId::Pricing, "pricing", "Pricing", PageGroup::Product),
    meta(PageId::Compare, "compare", "Folio vs. spreadsheets", PageGroup::Product),
    meta(PageId::Integrations, "integrations", "Integrations", PageGroup::Product),
    meta(PageId::MobileApps, "mobile", "Mobile apps", PageGroup::Product),
    meta(PageId::Security, "security", "Security", PageGroup::Product),
    meta(PageId::Changelog, "changelog", "Changelog", PageGroup::Product),
    meta(PageId::Roadmap, "roadmap", "Roadmap", PageGroup::Product),
    meta(PageId::About, "about", "About us", PageGroup::Company),
    meta(PageId::Careers, "careers", "Careers", PageGroup::Company),
    meta(PageId::Press, "press", "Press", PageGroup::Company),
    meta(PageId::Partners, "partners", "Partners", PageGroup::Company),
    meta(PageId::Affiliates, "affiliates", "Affiliate program", PageGroup::Company),
    meta(PageId::Testimonials, "testimonials", "Customer stories", PageGroup::Company),
    meta(PageId::Contact, "contact", "Contact", PageGroup::Company),
    meta(PageId::Blog, "blog", "Blog", PageGroup::Resources),
    meta(PageId::HelpCenter, "help", "Help center", PageGroup::Resources),
    meta(PageId::Developers, "developers", "Developers", PageGroup::Resources),
    meta(PageId::Faq, "faq", "Frequently asked questions", PageGroup::Resources),
    meta(PageId::Glossary, "glossary", "Investing glossary", PageGroup::Resources),
    meta(PageId::Status, "status", "System status", PageGroup::Resources),
    meta(PageId::Terms, "terms", "Terms of Service", PageGroup::Legal),
    meta(PageId::Privacy, "privacy", "Privacy Policy", PageGroup::Legal),
    meta(PageId::Cookies, "cookies", "Cookie Policy", PageGroup::Legal),
    meta(PageId::Refunds, "refunds", "Refund Policy", PageGroup::Legal),
    meta(PageId::Disclaimer, "disclaimer", "Investment Disclaimer", PageGroup::Legal),
    meta(PageId::AcceptableUse, "acceptable-use", "Acceptable Use Policy", PageGroup::Legal),
    meta(PageId::DataProcessing, "dpa", "Data Processing Addendum", PageGroup::Legal),
    meta(PageId::Accessibility, "accessibility", "Accessibility Statement", PageGroup::Legal),
    meta(PageId::Imprint, "imprint", "Imprint", PageGroup::Legal),
    meta(PageId::SignIn, "sign-in", "Sign in", PageGroup::Account),
    meta(PageId::SignUp, "sign-up", "Create your account", PageGroup::Account),
    meta(PageId::Dashboard, "dashboard", "Dashboard", PageGroup::Account),
    meta(PageId::NotFound, "not-found", "Page not found", PageGroup::System),
];

impl PageId {
    pub const ALL: [PageId; 35] = [
        PageId::Home,
        PageId::Features,
        PageId::Pricing,
        PageId::Compare,
        PageId::Integrations,
        PageId::MobileApps,
        PageId::Security,
        PageId::Changelog,
        PageId::Roadmap,
        PageId::About,
        PageId::Careers,
        PageId::Press,
        PageId::Partners,
        PageId::Affiliates,
        PageId::Testimonials,
        PageId::Contact,
        PageId::Blog,
        PageId::HelpCenter,
        PageId::Developers,
        PageId::Faq,
        PageId::Glossary,
        PageId::Status,
        PageId::Terms,
        PageId::Privacy,
        PageId::Cookies,
        PageId::Refunds,
        PageId::Disclaimer,
        PageId::AcceptableUse,
        PageId::DataProcessing,
        PageId::Accessibility,
        PageId::Imprint,
        PageId::SignIn,
        PageId::SignUp,
        PageId::Dashboard,
        PageId::NotFound,
    ];

    fn meta(self) -> &'static PageMeta {
        &PAGES[self as usize]
    }

    pub fn slug(self) -> &'static str {
        self.meta().slug
    }

    pub fn title(self) -> &'static str {
        self.meta().title
    }

    pub fn group(self) -> PageGroup {
        self.meta().group
    }

    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }

    /// Pages that are handed a navigation callback by the router.
    pub fn takes_navigation(self) -> bool {
        matches!(
            self,
            Self::Home | Self::Pricing | Self::SignIn | Self::SignUp | Self::Dashboard | Self::NotFound
        )
    }

    /// Browser tab title.
    pub fn document_title(self, site_name: &str) -> String {
        match self {
            Self::Home => format!("{site_name} · {}", self.title()),
            _ => format!("{} · {site_name}", self.title()),
        }
    }

    pub fn from_slug(slug: &str) -> Option<PageId> {
        let slug = slug.trim().trim_matches('/');
        PAGES
            .iter()
            .find(|page| page.slug.eq_ignore_ascii_case(slug))
            .map(|page| page.id)
    }

    /// Maps a location path to a page; anything unknown is `NotFound`.
    pub fn resolve(path: &str) -> PageId {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        Self::from_slug(path).unwrap_or(PageId::NotFound)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for PageId {
    type Err = ParsePageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| ParsePageError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_matches_enum_order() {
        for (index, page) in PageId::ALL.iter().enumerate() {
            assert_eq!(*page as usize, index);
            assert_eq!(PAGES[index].id, *page);
        }
    }

    #[test]
    fn test_slugs_round_trip() {
        let mut seen = HashSet::new();
        for page in PageId::ALL {
            assert!(seen.insert(page.slug()), "duplicate slug {}", page.slug());
            assert_eq!(PageId::resolve(&page.path()), page);
            assert_eq!(page.slug().parse::<PageId>(), Ok(page));
        }
    }

    #[test]
    fn test_unknown_paths_resolve_to_not_found() {
        assert_eq!(PageId::resolve("/definitely-not-a-page"), PageId::NotFound);
        assert_eq!(PageId::resolve("/terms/extra"), PageId::NotFound);
        assert!("wat".parse::<PageId>().is_err());
    }

    #[test]
    fn test_resolve_ignores_query_and_case() {
        assert_eq!(PageId::resolve("/Pricing?plan=pro"), PageId::Pricing);
        assert_eq!(PageId::resolve("/faq/#billing"), PageId::Faq);
        assert_eq!(PageId::resolve("/"), PageId::Home);
        assert_eq!(PageId::resolve(""), PageId::Home);
    }

    #[test]
    fn test_document_title() {
        assert_eq!(PageId::Terms.document_title("Folio"), "Terms of Service · Folio");
        assert!(PageId::Home.document_title("Folio").starts_with("Folio · "));
    }
}

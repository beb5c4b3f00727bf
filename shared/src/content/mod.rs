//! Static copy for every prose page, plus the FAQ and glossary tables.

mod faq;
mod glossary;
mod legal;
mod marketing;

pub use faq::{faq_categories, FaqEntry, FAQ};
pub use glossary::{glossary_letters, search_glossary, GlossaryEntry, GLOSSARY};

use crate::page::PageId;

#[derive(Debug, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq)]
pub struct Document {
    pub title: &'static str,
    pub summary: &'static str,
    /// Shown as "Last updated" on legal pages.
    pub updated: &'static str,
    pub sections: &'static [Section],
}

impl Document {
    /// Slug-style anchor for a section heading, used by the table of contents.
    pub fn anchor(heading: &str) -> String {
        heading
            .chars()
            .filter_map(|c| match c {
                c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
                ' ' | '-' => Some('-'),
                _ => None,
            })
            .collect::<String>()
            .split('-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn word_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|section| section.paragraphs.iter())
            .map(|paragraph| paragraph.split_whitespace().count())
            .sum()
    }
}

/// The prose behind a page, or `None` for pages with a bespoke component.
pub fn document(page: PageId) -> Option<&'static Document> {
    let doc = match page {
        PageId::Features => &marketing::FEATURES,
        PageId::Compare => &marketing::COMPARE,
        PageId::Integrations => &marketing::INTEGRATIONS,
        PageId::MobileApps => &marketing::MOBILE_APPS,
        PageId::Security => &marketing::SECURITY,
        PageId::Changelog => &marketing::CHANGELOG,
        PageId::Roadmap => &marketing::ROADMAP,
        PageId::About => &marketing::ABOUT,
        PageId::Careers => &marketing::CAREERS,
        PageId::Press => &marketing::PRESS,
        PageId::Partners => &marketing::PARTNERS,
        PageId::Affiliates => &marketing::AFFILIATES,
        PageId::Testimonials => &marketing::TESTIMONIALS,
        PageId::Blog => &marketing::BLOG,
        PageId::HelpCenter => &marketing::HELP_CENTER,
        PageId::Developers => &marketing::DEVELOPERS,
        PageId::Status => &marketing::STATUS,
        PageId::Terms => &legal::TERMS,
        PageId::Privacy => &legal::PRIVACY,
        PageId::Cookies => &legal::COOKIES,
        PageId::Refunds => &legal::REFUNDS,
        PageId::Disclaimer => &legal::DISCLAIMER,
        PageId::AcceptableUse => &legal::ACCEPTABLE_USE,
        PageId::DataProcessing => &legal::DATA_PROCESSING,
        PageId::Accessibility => &legal::ACCESSIBILITY,
        PageId::Imprint => &legal::IMPRINT,
        PageId::Home
        | PageId::Pricing
        | PageId::Contact
        | PageId::Faq
        | PageId::Glossary
        | PageId::SignIn
        | PageId::SignUp
        | PageId::Dashboard
        | PageId::NotFound => return None,
    };
    Some(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageGroup;

    #[test]
    fn test_every_legal_page_has_a_document() {
        for page in PageId::ALL.into_iter().filter(|p| p.group() == PageGroup::Legal) {
            let doc = document(page).unwrap_or_else(|| panic!("{page:?} has no document"));
            assert!(!doc.sections.is_empty());
            assert!(!doc.updated.is_empty());
        }
    }

    #[test]
    fn test_documents_are_not_empty() {
        for page in PageId::ALL {
            if let Some(doc) = document(page) {
                assert!(!doc.title.is_empty(), "{page:?}");
                assert!(doc.word_count() > 20, "{page:?} is too thin");
                for section in doc.sections {
                    assert!(!section.paragraphs.is_empty(), "{page:?}: {}", section.heading);
                }
            }
        }
    }

    #[test]
    fn test_section_anchors_are_unique_within_a_document() {
        for page in PageId::ALL {
            if let Some(doc) = document(page) {
                let mut anchors: Vec<String> =
                    doc.sections.iter().map(|s| Document::anchor(s.heading)).collect();
                let total = anchors.len();
                anchors.sort();
                anchors.dedup();
                assert_eq!(anchors.len(), total, "{page:?}");
            }
        }
    }

    #[test]
    fn test_anchor() {
        assert_eq!(Document::anchor("3. Fees & Billing"), "3-fees-billing");
        assert_eq!(Document::anchor("Who we are"), "who-we-are");
    }
}

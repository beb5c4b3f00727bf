use shared::PageId;
use yew::prelude::*;

pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod faq;
pub mod glossary;
pub mod home;
pub mod info;
pub mod legal;
pub mod not_found;
pub mod pricing;

/// Props for pages that only render content.
#[derive(Properties, PartialEq)]
pub struct PageProps {
    #[prop_or_default]
    pub is_dark: bool,
}

/// Props for pages that can move the visitor elsewhere.
#[derive(Properties, PartialEq)]
pub struct NavPageProps {
    #[prop_or_default]
    pub is_dark: bool,
    pub on_navigate: Callback<PageId>,
}

/// Props for pages rendered from a shared document template.
#[derive(Properties, PartialEq)]
pub struct DocumentPageProps {
    pub page: PageId,
    #[prop_or_default]
    pub is_dark: bool,
}

use std::rc::Rc;

use shared::constants::COMPANY;
use shared::{PageId, SiteConfig};
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::config::site_config;
use crate::hooks::auth_state::AuthContextProvider;
use crate::hooks::use_navigation::use_navigation;
use crate::hooks::use_theme::{use_theme, ThemeProvider};
use crate::pages::{
    auth::{Auth, AuthMode},
    contact::Contact,
    dashboard::Dashboard,
    faq::Faq,
    glossary::Glossary,
    home::Home,
    info::InfoPage,
    legal::LegalPage,
    not_found::NotFound,
    pricing::Pricing,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/:slug")]
    Page { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn page(&self) -> PageId {
        match self {
            Route::Home => PageId::Home,
            Route::Page { slug } => PageId::from_slug(slug).unwrap_or(PageId::NotFound),
            Route::NotFound => PageId::NotFound,
        }
    }
}

impl From<PageId> for Route {
    fn from(page: PageId) -> Self {
        match page {
            PageId::Home => Route::Home,
            PageId::NotFound => Route::NotFound,
            other => Route::Page {
                slug: other.slug().to_string(),
            },
        }
    }
}

/// Injected once at the root; components read it instead of global constants.
#[derive(Clone, PartialEq)]
pub struct SiteContext {
    pub config: Rc<SiteConfig>,
}

#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<SiteContext>()
        .map(|ctx| ctx.config)
        .unwrap_or_else(|| Rc::new(site_config().clone()))
}

#[function_component(App)]
pub fn app() -> Html {
    let site = use_memo((), |_| SiteContext {
        config: Rc::new(site_config().clone()),
    });

    html! {
        <ContextProvider<SiteContext> context={(*site).clone()}>
            <ThemeProvider>
                <AuthContextProvider>
                    <BrowserRouter>
                        <Base>
                            <Switch<Route> render={switch} />
                        </Base>
                    </BrowserRouter>
                </AuthContextProvider>
            </ThemeProvider>
        </ContextProvider<SiteContext>>
    }
}

pub fn switch(route: Route) -> Html {
    let page = route.page();
    if page == PageId::NotFound && route != Route::NotFound {
        log::debug!("No page for {:?}, showing not found", route);
    }
    html! { <PageView {page} /> }
}

#[derive(Properties, PartialEq)]
pub struct PageViewProps {
    pub page: PageId,
}

#[function_component(PageView)]
pub fn page_view(props: &PageViewProps) -> Html {
    let page = props.page;
    let theme = use_theme();
    let navigation = use_navigation();
    let is_dark = theme.theme.is_dark();

    use_effect_with(page, |page| {
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
            if let Some(document) = window.document() {
                document.set_title(&page.document_title(COMPANY.name));
            }
        }
        || ()
    });

    let on_navigate = page.takes_navigation().then(|| navigation.push_callback());
    let content = page_content(page, is_dark, on_navigate).unwrap_or_else(|| {
        log::error!("{page} was rendered without its navigation callback");
        html! { <NotFound {is_dark} on_navigate={navigation.push_callback()} /> }
    });

    html! {
        <div data-page={page.slug()} class="w-full">
            { content }
        </div>
    }
}

/// `None` when a page that needs navigation is given no callback.
fn page_content(page: PageId, is_dark: bool, on_navigate: Option<Callback<PageId>>) -> Option<Html> {
    let content = match (page, on_navigate) {
        (PageId::Home, Some(on_navigate)) => html! { <Home {is_dark} {on_navigate} /> },
        (PageId::Pricing, Some(on_navigate)) => html! { <Pricing {is_dark} {on_navigate} /> },
        (PageId::SignIn, Some(on_navigate)) => html! { <Auth mode={AuthMode::SignIn} {is_dark} {on_navigate} /> },
        (PageId::SignUp, Some(on_navigate)) => html! { <Auth mode={AuthMode::SignUp} {is_dark} {on_navigate} /> },
        (PageId::Dashboard, Some(on_navigate)) => html! { <Dashboard {is_dark} {on_navigate} /> },
        (PageId::NotFound, Some(on_navigate)) => html! { <NotFound {is_dark} {on_navigate} /> },
        (
            PageId::Home
            | PageId::Pricing
            | PageId::SignIn
            | PageId::SignUp
            | PageId::Dashboard
            | PageId::NotFound,
            None,
        ) => return None,
        (PageId::Contact, _) => html! { <Contact {is_dark} /> },
        (PageId::Faq, _) => html! { <Faq {is_dark} /> },
        (PageId::Glossary, _) => html! { <Glossary {is_dark} /> },
        (
            PageId::Terms
            | PageId::Privacy
            | PageId::Cookies
            | PageId::Refunds
            | PageId::Disclaimer
            | PageId::AcceptableUse
            | PageId::DataProcessing
            | PageId::Accessibility
            | PageId::Imprint,
            _,
        ) => html! { <LegalPage {page} {is_dark} /> },
        (
            PageId::Features
            | PageId::Compare
            | PageId::Integrations
            | PageId::MobileApps
            | PageId::Security
            | PageId::Changelog
            | PageId::Roadmap
            | PageId::About
            | PageId::Careers
            | PageId::Press
            | PageId::Partners
            | PageId::Affiliates
            | PageId::Testimonials
            | PageId::Blog
            | PageId::HelpCenter
            | PageId::Developers
            | PageId::Status,
            _,
        ) => html! { <InfoPage {page} {is_dark} /> },
    };
    Some(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_round_trips_every_page() {
        for page in PageId::ALL {
            assert_eq!(Route::from(page).page(), page, "{page:?}");
        }
    }

    #[test]
    fn test_route_paths_match_page_paths() {
        for page in PageId::ALL {
            if page == PageId::NotFound {
                continue;
            }
            assert_eq!(Route::from(page).to_path(), page.path());
        }
    }

    #[test]
    fn test_navigation_callback_goes_to_the_pages_that_take_it() {
        for page in PageId::ALL {
            assert!(page_content(page, false, Some(Callback::noop())).is_some(), "{page:?}");
            assert_eq!(
                page_content(page, false, None).is_none(),
                page.takes_navigation(),
                "{page:?}"
            );
        }
    }

    #[test]
    fn test_unknown_slug_maps_to_not_found() {
        let route = Route::Page {
            slug: "portfolio-magic".to_string(),
        };
        assert_eq!(route.page(), PageId::NotFound);
        assert_eq!(Route::NotFound.page(), PageId::NotFound);
    }
}

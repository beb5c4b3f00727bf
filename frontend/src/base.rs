use chrono::{Datelike, Utc};
use gloo::events::EventListener;
use shared::constants::{COMPANY, FOOTER_SECTIONS, NAV_LINKS};
use shared::PageId;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{BackToTop, GradientBackground, ScrollProgress, ThemePicker};
use crate::hooks::{use_auth, use_navigation, use_theme};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let theme = use_theme();
    let auth = use_auth();
    let navigation = use_navigation();
    let current = use_route::<Route>().map(|route| route.page());
    let show_dropdown = use_state(|| false);

    {
        let show_dropdown = show_dropdown.clone();
        use_effect_with((), move |_| {
            let listener = window().and_then(|w| w.document()).map(|document| {
                EventListener::new(&document, "click", move |event: &Event| {
                    let outside = event
                        .target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                        .and_then(|element| {
                            element.matches(".dropdown-container, .dropdown-container *").ok()
                        })
                        .map_or(true, |inside| !inside);
                    if outside {
                        show_dropdown.set(false);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let toggle_dropdown = {
        let show_dropdown = show_dropdown.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_dropdown.set(!*show_dropdown);
        })
    };

    let handle_sign_out = {
        let auth = auth.clone();
        let show_dropdown = show_dropdown.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_dropdown.set(false);
            if let Some(auth) = &auth {
                let navigation = navigation.clone();
                auth.sign_out(Callback::from(move |_| navigation.replace(PageId::Home)));
            }
        })
    };

    let nav_link = |page: PageId, label: &'static str| {
        let class = if current == Some(page) { styles::NAV_LINK_ACTIVE } else { styles::NAV_LINK };
        html! { <Link<Route> to={Route::from(page)} classes={class}>{ label }</Link<Route>> }
    };

    let user = auth.as_ref().and_then(|auth| auth.user.clone());

    html! {
        <GradientBackground is_dark={theme.theme.is_dark()}>
            <ScrollProgress />
            <nav class={styles::NAV}>
                <div class={styles::CONTAINER}>
                    <div class="h-16 flex items-center justify-between">
                        <div class="flex items-center">
                            <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>{ COMPANY.name }</Link<Route>>
                            <div class="hidden md:flex items-center ml-8 space-x-1">
                                { for NAV_LINKS.iter().map(|link| nav_link(link.page, link.label)) }
                            </div>
                        </div>

                        <div class={styles::NAV_ITEMS}>
                            <ThemePicker />
                            if let Some(user) = user {
                                <div class="relative dropdown-container">
                                    <button onclick={toggle_dropdown} class={styles::NAV_LINK}>
                                        { user.display_name().to_string() }
                                        <span class={classes!(styles::BADGE, "ml-2", "bg-[var(--surface-alt)]")}>{ user.plan.label() }</span>
                                    </button>
                                    if *show_dropdown {
                                        <div class={classes!(styles::DROPDOWN, "min-w-[160px]", "top-full", "mt-2")}>
                                            <Link<Route> to={Route::from(PageId::Dashboard)} classes={classes!(styles::DROPDOWN_BUTTON, "flex", "justify-center")}>
                                                {"Dashboard"}
                                            </Link<Route>>
                                            <Link<Route> to={Route::from(PageId::Pricing)} classes={classes!(styles::DROPDOWN_BUTTON, "flex", "justify-center")}>
                                                {"Plans"}
                                            </Link<Route>>
                                            <button onclick={handle_sign_out}
                                                class={classes!(
                                                    styles::DROPDOWN_BUTTON,
                                                    "flex",
                                                    "justify-center",
                                                    "text-red-700",
                                                    "dark:text-red-400",
                                                    "hover:bg-red-50",
                                                    "dark:hover:bg-red-900/20"
                                                )}>
                                                {"Sign out"}
                                            </button>
                                        </div>
                                    }
                                </div>
                            } else {
                                { nav_link(PageId::SignIn, "Sign in") }
                                <Link<Route> to={Route::from(PageId::SignUp)} classes={classes!(styles::BUTTON_PRIMARY, "text-sm")}>
                                    {"Start free"}
                                </Link<Route>>
                            }
                        </div>
                    </div>
                </div>
            </nav>

            <main class="pt-16 min-h-screen">
                { props.children.clone() }
            </main>

            <Footer />
            <BackToTop />
        </GradientBackground>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class={styles::FOOTER}>
            <div class={styles::CONTAINER_LG}>
                <div class="grid grid-cols-2 md:grid-cols-5 gap-8">
                    <div class="col-span-2 md:col-span-1">
                        <p class={styles::NAV_BRAND}>{ COMPANY.name }</p>
                        <p class={classes!(styles::TEXT_SMALL, "mt-2")}>{ COMPANY.tagline }</p>
                    </div>
                    { for FOOTER_SECTIONS.iter().map(|section| html! {
                        <div>
                            <h3 class={styles::FOOTER_HEADING}>{ section.title }</h3>
                            <ul class="mt-4 space-y-2">
                                { for section.links.iter().map(|link| html! {
                                    <li>
                                        <Link<Route> to={Route::from(link.page)} classes={styles::FOOTER_LINK}>
                                            { link.label }
                                        </Link<Route>>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="mt-10 pt-6 border-t border-[var(--border)] flex flex-col md:flex-row justify-between gap-2">
                    <p class={styles::TEXT_SMALL}>
                        { format!("© {}–{} {}. {}", COMPANY.founded, year, COMPANY.legal_name, COMPANY.address) }
                    </p>
                    <Link<Route> to={Route::from(PageId::Imprint)} classes={styles::FOOTER_LINK}>{"Imprint"}</Link<Route>>
                </div>
            </div>
        </footer>
    }
}

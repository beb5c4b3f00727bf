use shared::constants::{COMPANY, PLANS};
use shared::content::document;
use shared::PageId;
use yew::prelude::*;

use super::NavPageProps;
use crate::styles;

const STATS: [(&str, &str); 3] = [
    ("40+", "brokers and exchanges"),
    ("12k", "portfolios tracked"),
    ("2", "return methods, side by side"),
];

#[function_component(Home)]
pub fn home(props: &NavPageProps) -> Html {
    let go = |page: PageId| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
    };
    let highlights = document(PageId::Features).map(|doc| doc.sections).unwrap_or_default();
    let starting_price = PLANS.iter().map(|plan| plan.monthly_price).filter(|p| *p > 0).min();

    html! {
        <div class={styles::CONTAINER}>
            <section class={styles::HERO_SECTION}>
                <span class={classes!(styles::BADGE, "mb-6", "bg-[var(--surface-alt)]", "text-[var(--accent)]")}>
                    { format!("Portfolio tracking since {}", COMPANY.founded) }
                </span>
                <h1 class={styles::HERO_TITLE}>{ COMPANY.tagline }</h1>
                <p class={styles::HERO_TEXT}>
                    {"Folio pulls every broker, pension and exchange account into one ledger, then tells you what you actually earned."}
                </p>
                <div class={styles::HERO_BUTTONS}>
                    <button class={styles::HERO_CTA_BUTTON} onclick={go(PageId::SignUp)}>{"Start tracking free"}</button>
                    <button class={styles::BUTTON_SECONDARY} onclick={go(PageId::Features)}>{"See how it works"}</button>
                </div>
            </section>

            <section class="max-w-7xl mx-auto py-12">
                <div class={styles::FEATURE_GRID}>
                    { for highlights.iter().map(|section| html! {
                        <div class={styles::CARD_HOVER}>
                            <h3 class={styles::CARD_TITLE}>{ section.heading }</h3>
                            <p class={classes!(styles::CARD_TEXT, "mt-2")}>
                                { section.paragraphs.first().copied().unwrap_or_default() }
                            </p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="max-w-5xl mx-auto py-12 grid grid-cols-1 sm:grid-cols-3 gap-6 text-center">
                { for STATS.iter().map(|(value, label)| html! {
                    <div>
                        <p class={styles::TEXT_H1}>{ *value }</p>
                        <p class={styles::TEXT_SMALL}>{ *label }</p>
                    </div>
                }) }
            </section>

            <section class="max-w-3xl mx-auto py-16 text-center">
                <h2 class={styles::TEXT_H2}>{"Free for one portfolio. Fair after that."}</h2>
                <p class={classes!(styles::TEXT_BODY, "mt-4")}>
                    { match starting_price {
                        Some(price) => format!("Paid plans start at €{price} a month, with two months free on annual billing."),
                        None => "Every plan is free.".to_string(),
                    } }
                </p>
                <div class={styles::HERO_BUTTONS}>
                    <button class={styles::BUTTON_PRIMARY} onclick={go(PageId::Pricing)}>{"Compare plans"}</button>
                    <button class={styles::BUTTON_SECONDARY} onclick={go(PageId::Dashboard)}>{"Open the dashboard"}</button>
                </div>
            </section>
        </div>
    }
}

use shared::{AccessPolicy, DashboardSection, PageId};
use yew::prelude::*;

use super::NavPageProps;
use crate::app::use_site_config;
use crate::components::PlanRequired;
use crate::hooks::use_auth;
use crate::styles;

#[function_component(Dashboard)]
pub fn dashboard(props: &NavPageProps) -> Html {
    let config = use_site_config();
    let policy = use_memo(config, |config| AccessPolicy::new(config));
    let auth = use_auth();
    let user = auth.as_ref().and_then(|auth| auth.user.clone());

    let sign_in = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(PageId::SignIn))
    };

    let greeting = match &user {
        Some(user) => format!("Welcome back, {}", user.display_name()),
        None => "Your portfolio dashboard".to_string(),
    };

    html! {
        <div class={styles::CONTAINER_LG}>
            <h1 class={styles::TEXT_H1}>{ greeting }</h1>
            if let Some(user) = &user {
                <p class={classes!(styles::TEXT_SMALL, "mt-2")}>
                    { format!("{} plan", user.plan.label()) }
                    if !user.add_ons.is_empty() {
                        { format!(" · {} add-ons", user.add_ons.len()) }
                    }
                </p>
            }
            if policy.is_bypassed() {
                <div class={classes!(styles::ALERT_WARNING, "mt-6")}>
                    {"Access checks are switched off for this build, so every section is open."}
                </div>
            }

            <div class="mt-10 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for DashboardSection::ALL.iter().map(|section| {
                    let decision = policy.evaluate(*section, user.as_ref());
                    if decision.is_allowed() {
                        html! {
                            <div class={styles::CARD_HOVER}>
                                <h2 class={styles::CARD_TITLE}>{ section.title() }</h2>
                                <p class={classes!(styles::CARD_TEXT, "mt-2")}>{ section.description() }</p>
                            </div>
                        }
                    } else {
                        html! {
                            <PlanRequired
                                feature_name={section.title()}
                                {decision}
                                on_navigate={props.on_navigate.clone()}
                            />
                        }
                    }
                }) }
            </div>

            if user.is_none() && !policy.is_bypassed() {
                <div class="mt-12 text-center">
                    <button class={styles::BUTTON_PRIMARY} onclick={sign_in}>{"Sign in to unlock your dashboard"}</button>
                </div>
            }
        </div>
    }
}

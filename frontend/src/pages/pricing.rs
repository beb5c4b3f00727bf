use shared::constants::{PlanInfo, ADD_ONS, ANNUAL_BILLED_MONTHS, PLANS};
use shared::{PageId, Plan};
use yew::prelude::*;

use super::NavPageProps;
use crate::hooks::use_auth;
use crate::styles;

#[derive(Clone, Copy, PartialEq)]
enum Billing {
    Monthly,
    Annual,
}

fn price_label(info: &PlanInfo, billing: Billing) -> (String, &'static str) {
    if info.monthly_price == 0 {
        return ("Free".to_string(), "forever");
    }
    match billing {
        Billing::Monthly => (format!("€{}", info.monthly_price), "per month"),
        Billing::Annual => (
            format!("€{:.2}", info.annual_monthly_equivalent()),
            "per month, billed yearly",
        ),
    }
}

#[function_component(Pricing)]
pub fn pricing(props: &NavPageProps) -> Html {
    let billing = use_state(|| Billing::Monthly);
    let auth = use_auth();
    let current_plan: Option<Plan> = auth.as_ref().and_then(|a| a.user.as_ref()).map(|u| u.plan);

    let set_billing = |next: Billing| {
        let billing = billing.clone();
        Callback::from(move |_: MouseEvent| billing.set(next))
    };
    let toggle_class = |mode: Billing| {
        if *billing == mode { styles::BUTTON_PRIMARY } else { styles::BUTTON_SECONDARY }
    };

    let choose = {
        let on_navigate = props.on_navigate.clone();
        let signed_in = current_plan.is_some();
        move || {
            let on_navigate = on_navigate.clone();
            let target = if signed_in { PageId::Dashboard } else { PageId::SignUp };
            Callback::from(move |_: MouseEvent| on_navigate.emit(target))
        }
    };

    html! {
        <div class={styles::CONTAINER_LG}>
            <div class="text-center">
                <h1 class={styles::TEXT_H1}>{"Simple pricing for serious tracking"}</h1>
                <p class={classes!(styles::HERO_TEXT, "mt-4")}>
                    { format!("Pay yearly and get {} months free.", 12 - ANNUAL_BILLED_MONTHS) }
                </p>
                <div class="mt-8 inline-flex gap-2">
                    <button class={toggle_class(Billing::Monthly)} onclick={set_billing(Billing::Monthly)}>{"Monthly"}</button>
                    <button class={toggle_class(Billing::Annual)} onclick={set_billing(Billing::Annual)}>{"Annual"}</button>
                </div>
            </div>

            <div class="mt-12 grid grid-cols-1 md:grid-cols-3 gap-6">
                { for PLANS.iter().map(|info| {
                    let (price, period) = price_label(info, *billing);
                    let is_current = current_plan == Some(info.plan);
                    html! {
                        <div class={if info.highlighted { styles::CARD_HIGHLIGHT } else { styles::CARD }}>
                            if info.highlighted {
                                <span class={classes!(styles::BADGE, "absolute", "-top-3", "right-6", "bg-[var(--accent)]", "text-white")}>
                                    {"Most popular"}
                                </span>
                            }
                            <h2 class={styles::TEXT_H3}>{ info.plan.label() }</h2>
                            <p class={classes!(styles::CARD_TEXT, "mt-1")}>{ info.tagline }</p>
                            <p class="mt-6">
                                <span class={styles::TEXT_H1}>{ price }</span>
                                <span class={classes!(styles::TEXT_SMALL, "ml-2")}>{ period }</span>
                            </p>
                            <ul class="mt-6 space-y-2">
                                { for info.features.iter().map(|feature| html! {
                                    <li class={styles::CARD_TEXT}>{"✓ "}{ *feature }</li>
                                }) }
                            </ul>
                            <button class={classes!(styles::BUTTON_PRIMARY, "w-full", "mt-8")} onclick={choose()} disabled={is_current}>
                                { if is_current { "Your current plan" } else { "Get started" } }
                            </button>
                        </div>
                    }
                }) }
            </div>

            <section class="mt-16">
                <h2 class={styles::TEXT_H2}>{"Add-ons"}</h2>
                <p class={classes!(styles::TEXT_BODY, "mt-2")}>{"Available on any paid plan."}</p>
                <div class="mt-6 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    { for ADD_ONS.iter().map(|add_on| html! {
                        <div class={styles::CARD}>
                            <h3 class={styles::CARD_TITLE}>{ add_on.name }</h3>
                            <p class={classes!(styles::CARD_TEXT, "mt-2")}>{ format!("€{} per month", add_on.monthly_price) }</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::constants::plan_info;

    #[test]
    fn test_price_labels() {
        assert_eq!(price_label(plan_info(Plan::Starter), Billing::Annual).0, "Free");
        assert_eq!(price_label(plan_info(Plan::Standard), Billing::Monthly).0, "€9");
        assert_eq!(price_label(plan_info(Plan::Standard), Billing::Annual).0, "€7.50");
    }
}

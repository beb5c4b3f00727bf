use shared::constants::add_on_name;
use shared::{AccessDecision, PageId};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PlanRequiredProps {
    pub feature_name: AttrValue,
    pub decision: AccessDecision,
    pub on_navigate: Callback<PageId>,
}

fn explain(decision: &AccessDecision) -> (String, &'static str, PageId) {
    match decision {
        AccessDecision::SignInRequired => (
            "Sign in to see this part of your dashboard.".to_string(),
            "Sign in",
            PageId::SignIn,
        ),
        AccessDecision::UpgradeRequired(plan) => (
            format!("Available on the {plan} plan and above."),
            "Compare plans",
            PageId::Pricing,
        ),
        AccessDecision::AddOnsRequired(add_ons) => {
            let names: Vec<&str> = add_ons
                .iter()
                .map(|id| add_on_name(id))
                .collect();
            (
                format!("Requires the {} add-on.", names.join(" and ")),
                "See add-ons",
                PageId::Pricing,
            )
        }
        AccessDecision::NotRequired | AccessDecision::Granted => {
            (String::new(), "Open", PageId::Dashboard)
        }
    }
}

#[function_component(PlanRequired)]
pub fn plan_required(props: &PlanRequiredProps) -> Html {
    let (message, action, target) = explain(&props.decision);
    let badge = match props.decision {
        AccessDecision::SignInRequired => "Account required",
        _ => "Upgrade required",
    };
    let onclick = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(target))
    };

    html! {
        <div class="flex flex-col items-center justify-center p-6 bg-[var(--surface-alt)] rounded-lg border border-dashed border-[var(--border)] text-center">
            <span class={classes!(styles::BADGE, "mb-4", "bg-amber-100", "text-amber-800", "dark:bg-amber-800", "dark:text-amber-100")}>
                <svg xmlns="http://www.w3.org/2000/svg" class="h-4 w-4 mr-1.5" viewBox="0 0 20 20" fill="currentColor">
                    <path fill-rule="evenodd" d="M5 9V7a5 5 0 0110 0v2a2 2 0 012 2v5a2 2 0 01-2 2H5a2 2 0 01-2-2v-5a2 2 0 012-2zm8-2v2H7V7a3 3 0 016 0z" clip-rule="evenodd" />
                </svg>
                { badge }
            </span>
            <h3 class={classes!(styles::CARD_TITLE, "mb-2")}>{ props.feature_name.clone() }</h3>
            <p class={classes!(styles::CARD_TEXT, "mb-6")}>{ message }</p>
            <button type="button" class={styles::BUTTON_PRIMARY} {onclick}>{ action }</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Plan;

    #[test]
    fn test_add_on_message_uses_catalogue_names() {
        let decision = AccessDecision::AddOnsRequired(vec!["tax-reports".to_string()]);
        let (message, _, target) = explain(&decision);
        assert!(message.contains("Tax"), "{message}");
        assert_eq!(target, PageId::Pricing);
    }

    #[test]
    fn test_sign_in_points_to_sign_in_page() {
        let (_, _, target) = explain(&AccessDecision::SignInRequired);
        assert_eq!(target, PageId::SignIn);
        let (message, _, _) = explain(&AccessDecision::UpgradeRequired(Plan::Pro));
        assert!(message.contains("Pro"));
    }
}

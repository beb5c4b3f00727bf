use shared::PageId;
use yew::prelude::*;

use super::NavPageProps;
use crate::styles;

#[function_component(NotFound)]
pub fn not_found(props: &NavPageProps) -> Html {
    let home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(PageId::Home))
    };
    let help = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(PageId::HelpCenter))
    };

    html! {
        <div class={classes!(styles::CONTAINER_MD, "text-center", "py-24")}>
            <p class={styles::HERO_TITLE}>{"404"}</p>
            <h1 class={classes!(styles::TEXT_H2, "mt-6")}>{"This page isn't in the portfolio"}</h1>
            <p class={classes!(styles::TEXT_BODY, "mt-4")}>
                {"The link may be old, or the page may have moved."}
            </p>
            <div class={styles::HERO_BUTTONS}>
                <button class={styles::BUTTON_PRIMARY} onclick={home}>{"Back to home"}</button>
                <button class={styles::BUTTON_SECONDARY} onclick={help}>{"Visit the help center"}</button>
            </div>
        </div>
    }
}

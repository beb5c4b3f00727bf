use shared::constants::BACK_TO_TOP_THRESHOLD;
use web_sys::{window, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::hooks::use_scroll;
use crate::styles;

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let metrics = use_scroll();
    if metrics.scroll_top <= BACK_TO_TOP_THRESHOLD {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button type="button" class={styles::BACK_TO_TOP} {onclick} aria-label="Back to top">
            <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 15l7-7 7 7" />
            </svg>
        </button>
    }
}

use shared::content::{faq_categories, FAQ};
use yew::prelude::*;

use super::PageProps;
use crate::styles;

#[function_component(Faq)]
pub fn faq(_props: &PageProps) -> Html {
    // Index into FAQ of the open answer.
    let open = use_state(|| None::<usize>);

    html! {
        <div class={styles::CONTAINER_MD}>
            <h1 class={styles::TEXT_H1}>{"Frequently asked questions"}</h1>
            { for faq_categories().into_iter().map(|category| html! {
                <section class="mt-10">
                    <h2 class={styles::TEXT_H3}>{ category }</h2>
                    <div class="mt-4 divide-y divide-[var(--border)] border-y border-[var(--border)]">
                        { for FAQ.iter().enumerate().filter(|(_, entry)| entry.category == category).map(|(index, entry)| {
                            let is_open = *open == Some(index);
                            let onclick = {
                                let open = open.clone();
                                Callback::from(move |_: MouseEvent| {
                                    open.set(if is_open { None } else { Some(index) })
                                })
                            };
                            html! {
                                <div class="py-4">
                                    <button type="button" class="w-full flex justify-between items-center text-left" aria-expanded={is_open.to_string()} {onclick}>
                                        <span class={styles::CARD_TITLE}>{ entry.question }</span>
                                        <span class={styles::TEXT_SMALL}>{ if is_open { "−" } else { "+" } }</span>
                                    </button>
                                    if is_open {
                                        <p class={classes!(styles::TEXT_BODY, "mt-3")}>{ entry.answer }</p>
                                    }
                                </div>
                            }
                        }) }
                    </div>
                </section>
            }) }
        </div>
    }
}

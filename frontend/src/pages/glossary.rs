use shared::content::{glossary_letters, search_glossary, Document};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::PageProps;
use crate::styles;

#[function_component(Glossary)]
pub fn glossary(_props: &PageProps) -> Html {
    let query = use_state(String::new);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let hits = search_glossary(&query);
    let letters = glossary_letters();

    html! {
        <div class={styles::CONTAINER_MD}>
            <h1 class={styles::TEXT_H1}>{"Glossary"}</h1>
            <p class={classes!(styles::TEXT_BODY, "mt-4")}>{"The vocabulary of portfolio tracking, in plain words."}</p>
            <input type="search" class={styles::INPUT} placeholder="Search terms" value={(*query).clone()} {oninput} />
            <nav class="mt-6 flex flex-wrap gap-2" aria-label="Jump to letter">
                { for letters.iter().map(|letter| html! {
                    <a href={format!("#letter-{letter}")} class={classes!(styles::LINK, "font-mono")}>{ letter.to_string() }</a>
                }) }
            </nav>
            if hits.is_empty() {
                <p class={classes!(styles::TEXT_SMALL, "mt-8")}>{ format!("No terms match \"{}\".", query.trim()) }</p>
            }
            <dl class="mt-8 space-y-6">
                { for hits.iter().enumerate().map(|(index, entry)| {
                    let letter = entry.term.chars().next().map(|c| c.to_ascii_uppercase());
                    let first_of_letter = index == 0
                        || hits[index - 1].term.chars().next().map(|c| c.to_ascii_uppercase()) != letter;
                    html! {
                        <div id={Document::anchor(entry.term)} class="scroll-mt-24">
                            if first_of_letter {
                                if let Some(letter) = letter {
                                    <span id={format!("letter-{letter}")} class="block scroll-mt-24" />
                                }
                            }
                            <dt class={styles::CARD_TITLE}>{ entry.term }</dt>
                            <dd class={classes!(styles::TEXT_BODY, "mt-1")}>{ entry.definition }</dd>
                        </div>
                    }
                }) }
            </dl>
        </div>
    }
}

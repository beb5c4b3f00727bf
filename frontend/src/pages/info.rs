use shared::content::document;
use yew::prelude::*;

use super::DocumentPageProps;
use crate::styles;

/// Marketing and resource pages that are plain prose.
#[function_component(InfoPage)]
pub fn info_page(props: &DocumentPageProps) -> Html {
    let Some(doc) = document(props.page) else {
        log::error!("No content for {:?}", props.page);
        return html! {};
    };
    let minutes = (doc.word_count() / 200).max(1);

    html! {
        <div class={styles::CONTAINER_LG}>
            <header class="max-w-3xl">
                <p class={classes!(styles::TEXT_SMALL, "uppercase", "tracking-wider")}>{ props.page.title() }</p>
                <h1 class={classes!(styles::TEXT_H1, "mt-2")}>{ doc.title }</h1>
                <p class={styles::HERO_TEXT}>{ doc.summary }</p>
                <p class={classes!(styles::TEXT_HINT, "mt-2")}>{ format!("{minutes} min read") }</p>
            </header>
            <div class="mt-12 grid grid-cols-1 md:grid-cols-2 gap-6">
                { for doc.sections.iter().map(|section| html! {
                    <section class={styles::CARD}>
                        <h2 class={styles::CARD_TITLE}>{ section.heading }</h2>
                        { for section.paragraphs.iter().map(|paragraph| html! {
                            <p class={classes!(styles::CARD_TEXT, "mt-3", "leading-6")}>{ *paragraph }</p>
                        }) }
                    </section>
                }) }
            </div>
        </div>
    }
}

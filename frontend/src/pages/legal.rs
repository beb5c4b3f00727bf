use shared::constants::COMPANY;
use shared::content::{document, Document};
use yew::prelude::*;

use super::DocumentPageProps;
use crate::components::CopyButton;
use crate::styles;

#[function_component(LegalPage)]
pub fn legal_page(props: &DocumentPageProps) -> Html {
    let Some(doc) = document(props.page) else {
        log::error!("No legal text for {:?}", props.page);
        return html! {};
    };

    html! {
        <article class={styles::CONTAINER_MD}>
            <header>
                <h1 class={styles::TEXT_H1}>{ doc.title }</h1>
                if !doc.updated.is_empty() {
                    <p class={classes!(styles::TEXT_SMALL, "mt-2")}>{ format!("Last updated {}", doc.updated) }</p>
                }
                <p class={classes!(styles::TEXT_BODY, "mt-4")}>{ doc.summary }</p>
            </header>

            <nav class={classes!(styles::CARD, "mt-8")} aria-label="Contents">
                <h2 class={styles::FOOTER_HEADING}>{"Contents"}</h2>
                <ol class="mt-3 space-y-1 list-decimal list-inside">
                    { for doc.sections.iter().map(|section| html! {
                        <li>
                            <a href={format!("#{}", Document::anchor(section.heading))} class={styles::LINK}>
                                { section.heading }
                            </a>
                        </li>
                    }) }
                </ol>
            </nav>

            <div class={styles::PROSE}>
                { for doc.sections.iter().map(|section| html! {
                    <section>
                        <h2 id={Document::anchor(section.heading)} class={styles::PROSE_HEADING}>{ section.heading }</h2>
                        { for section.paragraphs.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
                    </section>
                }) }
            </div>

            <footer class={classes!(styles::CARD, "mt-12", "flex", "items-center", "justify-between", "gap-4")}>
                <p class={styles::CARD_TEXT}>
                    { format!("Questions about this document? Write to {}.", COMPANY.legal_email) }
                </p>
                <CopyButton text={COMPANY.legal_email} label="Copy address" />
            </footer>
        </article>
    }
}

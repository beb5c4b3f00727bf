use shared::constants::{COMPANY, INVALID_EMAIL_ERROR};
use shared::validation::validate_email;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::PageProps;
use crate::components::CopyButton;
use crate::hooks::use_form_state;
use crate::styles;

const MAX_MESSAGE_LENGTH: usize = 2_000;

/// Builds the `mailto:` link the contact form opens.
fn mailto_link(to: &str, from: &str, message: &str) -> String {
    let subject = String::from(js_sys::encode_uri_component(&format!("Question from {from}")));
    let body = String::from(js_sys::encode_uri_component(message));
    format!("mailto:{to}?subject={subject}&body={body}")
}

fn check_message(from: &str, message: &str) -> Result<(), String> {
    validate_email(from).map_err(|_| INVALID_EMAIL_ERROR.to_string())?;
    match message.trim().chars().count() {
        0 => Err("Please write a message".to_string()),
        n if n > MAX_MESSAGE_LENGTH => Err(format!("Please keep it under {MAX_MESSAGE_LENGTH} characters")),
        _ => Ok(()),
    }
}

#[function_component(Contact)]
pub fn contact(_props: &PageProps) -> Html {
    let form = use_form_state();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let form = form.clone();
        let (email_ref, message_ref) = (email_ref.clone(), message_ref.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let from = email_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let message = message_ref
                .cast::<HtmlTextAreaElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            if let Err(reason) = check_message(&from, &message) {
                form.handle_error.emit(reason);
                return;
            }
            let link = mailto_link(COMPANY.support_email, from.trim(), message.trim());
            match window().map(|w| w.location().set_href(&link)) {
                Some(Ok(())) => form.handle_success.emit("Your mail app should open with the message ready to send.".to_string()),
                _ => {
                    log::error!("Could not open mail client");
                    form.handle_error.emit(format!("Please email us at {}", COMPANY.support_email));
                }
            }
        })
    };

    let channels = [
        ("Support", COMPANY.support_email, "Questions about your account or data."),
        ("Legal", COMPANY.legal_email, "Contracts, terms and compliance."),
        ("Privacy", COMPANY.privacy_email, "Data requests and privacy questions."),
    ];

    html! {
        <div class={styles::CONTAINER_LG}>
            <h1 class={styles::TEXT_H1}>{"Talk to us"}</h1>
            <p class={classes!(styles::TEXT_BODY, "mt-4", "max-w-2xl")}>
                {"A person reads every message, usually within one working day."}
            </p>

            <div class="mt-10 grid grid-cols-1 lg:grid-cols-2 gap-8">
                <div class="space-y-4">
                    { for channels.iter().map(|(label, email, blurb)| html! {
                        <div class={classes!(styles::CARD, "flex", "items-center", "justify-between", "gap-4")}>
                            <div>
                                <h2 class={styles::CARD_TITLE}>{ *label }</h2>
                                <a href={format!("mailto:{email}")} class={styles::LINK}>{ *email }</a>
                                <p class={styles::CARD_TEXT}>{ *blurb }</p>
                            </div>
                            <CopyButton text={*email} />
                        </div>
                    }) }
                    <div class={styles::CARD}>
                        <h2 class={styles::CARD_TITLE}>{"Post"}</h2>
                        <p class={styles::CARD_TEXT}>{ COMPANY.legal_name }</p>
                        <p class={styles::CARD_TEXT}>{ COMPANY.address }</p>
                    </div>
                </div>

                <form class={classes!(styles::CARD, "space-y-4")} {onsubmit} novalidate=true>
                    <div>
                        <label for="contact-email" class={styles::TEXT_LABEL}>{"Your email"}</label>
                        <input ref={email_ref} id="contact-email" type="email" class={styles::INPUT} />
                    </div>
                    <div>
                        <label for="contact-message" class={styles::TEXT_LABEL}>{"Message"}</label>
                        <textarea ref={message_ref} id="contact-message" rows="6" class={styles::INPUT} />
                    </div>
                    if form.has_error() {
                        <p class={styles::TEXT_ERROR}>{ form.error.clone() }</p>
                    }
                    if !form.success.is_empty() {
                        <p class={styles::TEXT_SUCCESS}>{ form.success.clone() }</p>
                    }
                    <button type="submit" class={styles::BUTTON_PRIMARY}>{"Send"}</button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_checks() {
        assert!(check_message("ada@folio.app", "Hello").is_ok());
        assert_eq!(
            check_message("nope", "Hello"),
            Err(INVALID_EMAIL_ERROR.to_string())
        );
        assert!(check_message("ada@folio.app", "   ").is_err());
        assert!(check_message("ada@folio.app", &"x".repeat(MAX_MESSAGE_LENGTH + 1)).is_err());
    }
}

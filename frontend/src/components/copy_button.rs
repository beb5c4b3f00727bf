use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::window;
use yew::prelude::*;

use crate::styles;

const CONFIRMATION_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("Copy"))]
    pub label: AttrValue,
}

/// Writes `text` to the clipboard and briefly shows a confirmation.
#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let copied = use_state(|| false);

    let onclick = {
        let copied = copied.clone();
        let text = props.text.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(clipboard) = window().map(|w| w.navigator().clipboard()) else {
                log::error!("Clipboard unavailable");
                return;
            };
            let promise = clipboard.write_text(&text);
            let copied = copied.clone();
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => {
                        copied.set(true);
                        let copied = copied.clone();
                        Timeout::new(CONFIRMATION_MS, move || copied.set(false)).forget();
                    }
                    Err(err) => log::error!("Clipboard write failed: {err:?}"),
                }
            });
        })
    };

    html! {
        <button type="button" class={classes!(styles::BUTTON_SECONDARY, "text-xs", "py-1")} {onclick}>
            if *copied { {"Copied"} } else { { props.label.clone() } }
        </button>
    }
}

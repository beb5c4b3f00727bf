use shared::ThemeName;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::use_theme;
use crate::styles;

#[function_component(ThemePicker)]
pub fn theme_picker() -> Html {
    let theme = use_theme();

    let onchange = {
        let set_theme = theme.set_theme.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) else {
                return;
            };
            match select.value().parse::<ThemeName>() {
                Ok(next) => set_theme.emit(next),
                Err(err) => log::warn!("{err}"),
            }
        })
    };

    let toggle = {
        let toggle_dark = theme.toggle_dark.clone();
        Callback::from(move |_: MouseEvent| toggle_dark.emit(()))
    };

    html! {
        <div class="flex items-center gap-2">
            <select class={styles::SELECT} aria-label="Theme" {onchange}>
                { for ThemeName::ALL.iter().map(|option| html! {
                    <option value={option.as_str()} selected={*option == theme.theme}>
                        { option.label() }
                    </option>
                }) }
            </select>
            <button type="button" onclick={toggle} class={styles::BUTTON_ICON} aria-label="Toggle dark mode">
                if theme.theme.is_dark() {
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z" />
                    </svg>
                } else {
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z" />
                    </svg>
                }
            </button>
        </div>
    }
}

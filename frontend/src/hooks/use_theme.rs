use shared::theme::root_classes;
use shared::{ThemeName, ThemeStore};
use web_sys::window;
use yew::prelude::*;

use crate::app::use_site_config;
use crate::storage::BrowserStore;

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: ThemeName,
    pub set_theme: Callback<ThemeName>,
    pub toggle_dark: Callback<()>,
}

fn apply_theme(theme: ThemeName) {
    if let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        html.set_class_name(&root_classes(&html.class_name(), theme));
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let config = use_site_config();
    let store = use_memo(config.default_theme, |fallback| {
        ThemeStore::new(BrowserStore, *fallback)
    });
    let theme = {
        let store = store.clone();
        use_state(move || store.current())
    };

    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        log::debug!("Theme applied: {theme}");
        || ()
    });

    let set_theme = {
        let theme = theme.clone();
        let store = store.clone();
        Callback::from(move |next: ThemeName| theme.set(store.set(next)))
    };

    let toggle_dark = {
        let theme = theme.clone();
        let store = store.clone();
        Callback::from(move |_| theme.set(store.toggle_dark()))
    };

    let context = ThemeContext {
        theme: *theme,
        set_theme,
        toggle_dark,
    };

    html! {
        <ContextProvider<ThemeContext> {context}>
            { props.children.clone() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: ThemeName::default(),
        set_theme: Callback::noop(),
        toggle_dark: Callback::noop(),
    })
}

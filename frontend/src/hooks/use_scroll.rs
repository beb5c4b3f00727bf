use gloo::events::EventListener;
use web_sys::window;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

fn read_metrics() -> ScrollMetrics {
    let Some(window) = window() else {
        return ScrollMetrics::default();
    };
    let scroll_top = window.scroll_y().unwrap_or_default();
    match window.document().and_then(|d| d.document_element()) {
        Some(root) => ScrollMetrics {
            scroll_top,
            scroll_height: f64::from(root.scroll_height()),
            client_height: f64::from(root.client_height()),
        },
        None => ScrollMetrics {
            scroll_top,
            ..ScrollMetrics::default()
        },
    }
}

/// Tracks the window's scroll position, refreshed on scroll and resize.
#[hook]
pub fn use_scroll() -> ScrollMetrics {
    let metrics = use_state(read_metrics);

    {
        let metrics = metrics.clone();
        use_effect_with((), move |_| {
            let listeners = window().map(|window| {
                let on_scroll = {
                    let metrics = metrics.clone();
                    EventListener::new(&window, "scroll", move |_| metrics.set(read_metrics()))
                };
                let on_resize = EventListener::new(&window, "resize", move |_| {
                    metrics.set(read_metrics())
                });
                (on_scroll, on_resize)
            });
            move || drop(listeners)
        });
    }

    *metrics
}

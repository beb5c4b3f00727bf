use yew::prelude::*;

use crate::hooks::use_scroll;
use crate::styles;

/// Fraction of the page scrolled past, in `[0, 1]`.
///
/// Pages shorter than the viewport count as fully read.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 1.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

#[function_component(ScrollProgress)]
pub fn scroll_progress_bar() -> Html {
    let metrics = use_scroll();
    let progress = scroll_progress(metrics.scroll_top, metrics.scroll_height, metrics.client_height);
    let percent = progress * 100.0;

    html! {
        <div
            class={styles::SCROLL_PROGRESS}
            style={format!("width: {percent:.2}%")}
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={format!("{}", percent.round())}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 1.0);
        // Elastic overscroll on mobile reports values past either end.
        assert_eq!(scroll_progress(-40.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_short_page_is_complete() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(0.0, f64::NAN, 1000.0), 1.0);
    }
}

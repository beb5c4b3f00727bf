pub mod back_to_top;
pub mod copy_button;
pub mod gradient_background;
pub mod plan_required;
pub mod scroll_progress;
pub mod theme_picker;

pub use back_to_top::BackToTop;
pub use copy_button::CopyButton;
pub use gradient_background::GradientBackground;
pub use plan_required::PlanRequired;
pub use scroll_progress::{scroll_progress, ScrollProgress};
pub use theme_picker::ThemePicker;

pub mod auth_state;
pub mod form_state;
pub mod use_navigation;
pub mod use_scroll;
pub mod use_theme;

pub use auth_state::*;
pub use form_state::*;
pub use use_navigation::use_navigation;
pub use use_scroll::*;
pub use use_theme::*;

use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::services::PageNavigator;

#[hook]
pub fn use_navigation() -> PageNavigator {
    PageNavigator::new(use_navigator())
}

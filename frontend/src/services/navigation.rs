use shared::PageId;
use yew::Callback;
use yew_router::prelude::Navigator;

use crate::app::Route;

/// Page-level navigation over the router's history.
///
/// Outside a router (which only happens in isolated component tests) every
/// call is a logged no-op.
#[derive(Clone, PartialEq)]
pub struct PageNavigator {
    navigator: Option<Navigator>,
}

impl PageNavigator {
    pub fn new(navigator: Option<Navigator>) -> Self {
        Self { navigator }
    }

    pub fn push(&self, page: PageId) {
        match &self.navigator {
            Some(navigator) => navigator.push(&Route::from(page)),
            None => log::warn!("No router available, cannot open {page}"),
        }
    }

    /// Navigates without leaving a history entry, e.g. after sign-in.
    pub fn replace(&self, page: PageId) {
        match &self.navigator {
            Some(navigator) => navigator.replace(&Route::from(page)),
            None => log::warn!("No router available, cannot open {page}"),
        }
    }

    pub fn push_callback(&self) -> Callback<PageId> {
        let this = self.clone();
        Callback::from(move |page: PageId| this.push(page))
    }
}

use leptos::prelude::*;

use crate::routes::routes::AppRoute;
use crate::shared::view_state::{BrowserUrl, UrlSurface};

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<AppRoute>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(AppRoute::from_path(&BrowserUrl::shared().current_path())),
            left_open: RwSignal::new(true),
        }
    }

    /// Follows path changes (links and back/forward) for the lifetime of the page.
    pub fn init_router_integration(&self) {
        let route = self.route;
        BrowserUrl::shared()
            .channel()
            .subscribe(move |event| {
                let next = AppRoute::from_path(&event.path);
                if route.get_untracked() != next {
                    log::debug!("route: {} -> {}", route.get_untracked().path(), next.path());
                    route.set(next);
                }
            })
            .forget();
    }

    /// The route itself follows from the emitted path change.
    pub fn open_view(&self, route: AppRoute) {
        BrowserUrl::shared().open_path(route.path());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

//! `localStorage` and `window.history` behind the view-state traits.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::error::{Result, ViewStateError};
use super::query::QueryMap;
use super::storage::KeyValueStorage;
use super::url::{QueryChanged, QueryChannel, UrlSurface};

fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(ViewStateError::StorageUnavailable)
}

fn js_err(e: JsValue) -> ViewStateError {
    ViewStateError::Storage(format!("{e:?}"))
}

#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        local_storage()?.get_item(key).map_err(js_err)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        local_storage()?.set_item(key, value).map_err(js_err)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        local_storage()?.remove_item(key).map_err(js_err)
    }
}

thread_local! {
    static BROWSER_URL: Rc<BrowserUrl> = BrowserUrl::install();
}

/// The address bar. One instance per page, shared by every mounted view.
pub struct BrowserUrl {
    channel: QueryChannel,
}

impl BrowserUrl {
    pub fn shared() -> Rc<BrowserUrl> {
        BROWSER_URL.with(Rc::clone)
    }

    fn install() -> Rc<Self> {
        let url = Rc::new(Self {
            channel: QueryChannel::new(),
        });

        let channel = url.channel.clone();
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            channel.emit(&current_location());
        }) as Box<dyn FnMut(_)>);
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window
                    .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                {
                    log::warn!("popstate listener was not registered: {:?}", e);
                }
            }
            None => log::warn!("no window; back/forward will not be followed"),
        }
        closure.forget();

        url
    }

    /// Follows an in-app link to another view: new path, empty query.
    pub fn open_path(&self, path: &str) {
        if path == self.current_path() && self.current_query().is_empty() {
            return;
        }
        push_history(path);
        self.channel.emit(&current_location());
    }
}

fn current_location() -> QueryChanged {
    let location = web_sys::window().map(|w| w.location());
    let path = location
        .as_ref()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    let search = location
        .as_ref()
        .and_then(|l| l.search().ok())
        .unwrap_or_default();
    QueryChanged {
        path,
        query: QueryMap::parse(&search),
    }
}

fn push_history(target: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        log::warn!("history API is not available");
        return;
    };
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(target)) {
        log::warn!("pushState to '{}' failed: {:?}", target, e);
    }
}

impl UrlSurface for BrowserUrl {
    fn current_path(&self) -> String {
        current_location().path
    }

    fn current_query(&self) -> QueryMap {
        current_location().query
    }

    fn navigate(&self, query: QueryMap) {
        let target = format!("{}{}", self.current_path(), query.to_search_string());
        push_history(&target);
        self.channel.emit(&current_location());
    }

    fn replace_path(&self, path: &str) {
        let target = format!("{}{}", path, self.current_query().to_search_string());
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            log::warn!("history API is not available");
            return;
        };
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&target)) {
            log::warn!("replaceState to '{}' failed: {:?}", target, e);
        }
    }

    fn channel(&self) -> &QueryChannel {
        &self.channel
    }
}

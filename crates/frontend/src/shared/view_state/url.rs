//! URL surface and the "query changed" channel.
//!
//! Every change of the address bar query (a search write, programmatic
//! navigation, back/forward) is published as one [`QueryChanged`] event.
//! Reload logic subscribes to that single event.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::query::QueryMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryChanged {
    pub path: String,
    pub query: QueryMap,
}

type Listener = Rc<dyn Fn(&QueryChanged)>;

#[derive(Default)]
struct ChannelInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

#[derive(Clone, Default)]
pub struct QueryChannel {
    inner: Rc<RefCell<ChannelInner>>,
}

impl QueryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&QueryChanged) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            channel: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Calls every listener registered at the time of the call. Listeners
    /// may navigate (and so emit again) from inside the callback.
    pub fn emit(&self, event: &QueryChanged) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Dropping the guard unsubscribes the listener.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    channel: Weak<RefCell<ChannelInner>>,
    id: u64,
}

impl Subscription {
    /// Keeps the listener registered for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.channel.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

pub trait UrlSurface {
    fn current_path(&self) -> String;

    fn current_query(&self) -> QueryMap;

    /// Pushes a history entry with `query` on the current path and emits
    /// [`QueryChanged`].
    fn navigate(&self, query: QueryMap);

    /// Rewrites the path of the current entry, keeping its query, without
    /// adding history or emitting.
    fn replace_path(&self, path: &str);

    fn channel(&self) -> &QueryChannel;
}

/// History kept in memory; `back()` plays the role of the browser's
/// popstate.
pub struct MemoryUrl {
    path: RefCell<String>,
    entries: RefCell<Vec<QueryMap>>,
    channel: QueryChannel,
}

impl MemoryUrl {
    pub fn new(path: &str, search: &str) -> Self {
        Self {
            path: RefCell::new(path.to_string()),
            entries: RefCell::new(vec![QueryMap::parse(search)]),
            channel: QueryChannel::new(),
        }
    }

    pub fn history_len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Switches path with an empty query and emits, like following a link
    /// to another view.
    pub fn open_path(&self, path: &str) {
        *self.path.borrow_mut() = path.to_string();
        self.entries.borrow_mut().push(QueryMap::new());
        self.emit_current();
    }

    /// Drops the newest entry and emits the previous one.
    pub fn back(&self) -> bool {
        {
            let mut entries = self.entries.borrow_mut();
            if entries.len() < 2 {
                return false;
            }
            entries.pop();
        }
        self.emit_current();
        true
    }

    fn emit_current(&self) {
        let event = QueryChanged {
            path: self.current_path(),
            query: self.current_query(),
        };
        self.channel.emit(&event);
    }
}

impl UrlSurface for MemoryUrl {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn current_query(&self) -> QueryMap {
        self.entries.borrow().last().cloned().unwrap_or_default()
    }

    fn navigate(&self, query: QueryMap) {
        self.entries.borrow_mut().push(query);
        self.emit_current();
    }

    fn replace_path(&self, path: &str) {
        *self.path.borrow_mut() = path.to_string();
    }

    fn channel(&self) -> &QueryChannel {
        &self.channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_emits_and_records_history() {
        let url = MemoryUrl::new("/inventory", "");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in = seen.clone();
        let _sub = url
            .channel()
            .subscribe(move |e| seen_in.borrow_mut().push(e.query.to_search_string()));

        url.navigate(QueryMap::parse("brand__name=Prusa"));
        assert!(url.back());
        assert!(!url.back());

        assert_eq!(*seen.borrow(), vec!["?brand__name=Prusa".to_string(), String::new()]);
        assert_eq!(url.history_len(), 1);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let channel = QueryChannel::new();
        let sub = channel.subscribe(|_| {});
        let other = channel.subscribe(|_| {});
        assert_eq!(channel.listener_count(), 2);
        drop(sub);
        assert_eq!(channel.listener_count(), 1);
        other.forget();
        assert_eq!(channel.listener_count(), 1);
    }

    #[test]
    fn test_listener_may_navigate_reentrantly() {
        let url = Rc::new(MemoryUrl::new("/", ""));
        let url_in = Rc::downgrade(&url);
        let _sub = url.channel().subscribe(move |e| {
            if e.query.get("step") == Some("1") {
                if let Some(url) = url_in.upgrade() {
                    url.navigate(QueryMap::parse("step=2"));
                }
            }
        });
        url.navigate(QueryMap::parse("step=1"));
        assert_eq!(url.current_query(), QueryMap::parse("step=2"));
    }
}

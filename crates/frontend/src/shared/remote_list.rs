//! Remote collection loading with stale-response suppression.
//!
//! Every load takes a ticket from a [`RequestTracker`]. A response is only
//! applied while its ticket is the newest one and the owning view is still
//! mounted, so rapid filter changes never let an older response overwrite
//! a newer one.

use contracts::shared::api::{ApiError, PageResult, ServerPagination};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::system::auth::context::SessionContext;

/// Generation counter shared between a view and its in-flight requests
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
    cancelled: Arc<AtomicBool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request generation, superseding all earlier tickets
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        !self.cancelled.load(Ordering::SeqCst) && self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Called on unmount; no ticket is current afterwards
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Loading state of one remote collection
#[derive(Clone, Debug, PartialEq)]
pub struct ListLoadState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub pagination: Option<ServerPagination>,
    pub loaded_once: bool,
}

impl<T> Default for ListLoadState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            pagination: None,
            loaded_once: false,
        }
    }
}

impl<T> ListLoadState<T> {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replaces the whole collection with the fetched page
    pub fn succeed(&mut self, page: PageResult<T>) {
        self.items = page.items;
        self.pagination = page.pagination;
        self.loading = false;
        self.error = None;
        self.loaded_once = true;
    }

    /// Records a failure; items of the last successful load stay visible
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.pagination = None;
    }

    /// Successful load with zero rows, rendered as an empty state
    pub fn is_empty_result(&self) -> bool {
        self.loaded_once && !self.loading && self.error.is_none() && self.items.is_empty()
    }
}

/// Localized banner text for a failed load of `what` (e.g. "produk")
pub fn load_error_message(what: &str, error: &ApiError) -> String {
    format!("Gagal mengambil data {}: {}", what, error.user_message())
}

/// Reactive wrapper owned by a page container.
pub struct RemoteList<T: Send + Sync + 'static> {
    pub state: RwSignal<ListLoadState<T>>,
    tracker: StoredValue<RequestTracker>,
    session: Option<SessionContext>,
    what: &'static str,
}

impl<T: Send + Sync + 'static> Clone for RemoteList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteList<T> {}

impl<T: Send + Sync + 'static> RemoteList<T> {
    /// `what` names the collection in error messages.
    /// Must be created inside the owning component.
    pub fn new(what: &'static str) -> Self {
        let tracker = RequestTracker::new();
        let on_unmount = tracker.clone();
        on_cleanup(move || on_unmount.cancel());
        Self {
            state: RwSignal::new(ListLoadState::default()),
            tracker: StoredValue::new(tracker),
            session: use_context::<SessionContext>(),
            what,
        }
    }

    /// Issues a load. Safe to call again at any time; only the newest
    /// response is applied.
    pub fn load<F>(&self, request: F)
    where
        F: Future<Output = Result<PageResult<T>, ApiError>> + 'static,
    {
        let tracker = self.tracker.get_value();
        let ticket = tracker.begin();
        let state = self.state;
        let session = self.session;
        let what = self.what;
        state.update(|s| s.begin());

        spawn_local(async move {
            let result = request.await;
            if !tracker.is_current(ticket) {
                log::debug!("discarding superseded {} response", what);
                return;
            }
            match result {
                Ok(page) => {
                    log::debug!("loaded {} {} rows", page.items.len(), what);
                    state.update(|s| s.succeed(page));
                }
                Err(e) => {
                    log::warn!("failed to load {}: {}", what, e);
                    if e == ApiError::Unauthenticated {
                        if let Some(session) = session {
                            session.expire();
                        }
                    }
                    state.update(|s| s.fail(load_error_message(what, &e)));
                }
            }
        });
    }

    pub fn items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.state.with(|s| s.items.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    pub fn pagination(&self) -> Option<ServerPagination> {
        self.state.with(|s| s.pagination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<u32>) -> PageResult<u32> {
        PageResult {
            items,
            pagination: None,
        }
    }

    #[test]
    fn newer_ticket_supersedes_older() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn cancel_invalidates_every_ticket() {
        let tracker = RequestTracker::new();
        let ticket = tracker.begin();
        tracker.cancel();
        assert!(!tracker.is_current(ticket));
        let later = tracker.begin();
        assert!(!tracker.is_current(later));
        assert!(tracker.is_cancelled());
    }

    #[test]
    fn loading_flag_follows_the_request() {
        let mut state = ListLoadState::<u32>::default();
        assert!(!state.loading);

        state.begin();
        assert!(state.loading);
        assert!(state.error.is_none());

        state.succeed(page(vec![1, 2]));
        assert!(!state.loading);
        assert_eq!(state.items, vec![1, 2]);

        state.begin();
        state.fail("Gagal mengambil data produk");
        assert!(!state.loading);
    }

    #[test]
    fn failure_keeps_previous_items() {
        let mut state = ListLoadState::<u32>::default();
        state.begin();
        state.succeed(page(vec![7, 8, 9]));
        state.begin();
        state.fail("x");
        assert_eq!(state.items, vec![7, 8, 9]);
        assert_eq!(state.error.as_deref(), Some("x"));

        state.begin();
        assert!(state.error.is_none(), "retry clears the banner");
    }

    #[test]
    fn success_replaces_and_empty_is_not_an_error() {
        let mut state = ListLoadState::<u32>::default();
        assert!(!state.is_empty_result());
        state.begin();
        state.succeed(page(vec![1]));
        state.begin();
        state.succeed(page(vec![]));
        assert!(state.items.is_empty());
        assert!(state.is_empty_result());
    }

    #[test]
    fn error_message_is_localized() {
        let msg = load_error_message("produk", &ApiError::Network("offline".into()));
        assert!(msg.starts_with("Gagal mengambil data produk"));
    }
}

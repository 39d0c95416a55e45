use std::cell::RefCell;

use futures::FutureExt;
use futures::channel::mpsc::{self, UnboundedSender};
use futures::future::{self, LocalBoxFuture};

use crate::domain::{
    errors::StoreError,
    logging::LogComponent,
    watchlist::{
        WatchlistDraft, WatchlistItem, WatchlistItemId, WatchlistSnapshot, WatchlistStore, WatchlistSubscription,
    },
};
use crate::{log_debug, log_info};

#[derive(Debug, Default)]
struct StoreInner {
    items: Vec<WatchlistItem>,
    next_id: u64,
    subscribers: Vec<UnboundedSender<WatchlistSnapshot>>,
}

fn id_sequence(id: &WatchlistItemId) -> Option<u64> {
    id.value().strip_prefix("wl-")?.parse().ok()
}

impl StoreInner {
    fn publish(&mut self) {
        let snapshot = self.items.clone();
        self.subscribers.retain(|subscriber| subscriber.unbounded_send(snapshot.clone()).is_ok());
    }
}

/// Process-local watchlist store with observed-query subscriptions.
///
/// Stands in for the hosted real-time store: records live as long as the
/// store value, changes fan out to every live subscriber.
#[derive(Debug, Default)]
pub struct InMemoryWatchlistStore {
    inner: RefCell<StoreInner>,
}

impl InMemoryWatchlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. New ids continue after the highest `wl-NNNNNN` id
    /// already present.
    pub fn with_items(items: Vec<WatchlistItem>) -> Self {
        let next_id = items.iter().filter_map(|item| id_sequence(&item.id)).max().unwrap_or(0);
        Self {
            inner: RefCell::new(StoreInner { items, next_id, subscribers: Vec::new() }),
        }
    }

    pub fn items(&self) -> WatchlistSnapshot {
        self.inner.borrow().items.clone()
    }

    /// Live subscriptions; dropped handles are pruned first
    pub fn subscriber_count(&self) -> usize {
        let mut inner = self.inner.borrow_mut();
        inner.subscribers.retain(|subscriber| !subscriber.is_closed());
        inner.subscribers.len()
    }

    fn insert(&self, draft: WatchlistDraft) -> Result<WatchlistItem, StoreError> {
        if draft.token_id.value().trim().is_empty() {
            return Err(StoreError::Rejected("tokenId is required".to_string()));
        }
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = WatchlistItemId::from(format!("wl-{:06}", inner.next_id));
        let item = WatchlistItem::from_draft(id, draft);
        inner.items.push(item.clone());
        inner.publish();
        log_info!(LogComponent::Infrastructure("WatchlistStore"), "created {} for {}", item.id, item.token_id);
        Ok(item)
    }

    fn remove(&self, id: &WatchlistItemId) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        let position = inner
            .items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        inner.items.remove(position);
        inner.publish();
        log_info!(LogComponent::Infrastructure("WatchlistStore"), "deleted {}", id);
        Ok(())
    }
}

impl WatchlistStore for InMemoryWatchlistStore {
    fn create(&self, draft: WatchlistDraft) -> LocalBoxFuture<'_, Result<WatchlistItem, StoreError>> {
        future::ready(self.insert(draft)).boxed_local()
    }

    fn delete(&self, id: &WatchlistItemId) -> LocalBoxFuture<'_, Result<(), StoreError>> {
        future::ready(self.remove(id)).boxed_local()
    }

    fn subscribe(&self) -> WatchlistSubscription {
        let (sender, receiver) = mpsc::unbounded();
        let mut inner = self.inner.borrow_mut();
        // Initial snapshot goes out before any change notification.
        if sender.unbounded_send(inner.items.clone()).is_ok() {
            inner.subscribers.push(sender);
        }
        log_debug!(
            LogComponent::Infrastructure("WatchlistStore"),
            "subscriber attached ({} live)",
            inner.subscribers.len()
        );
        WatchlistSubscription::new(receiver)
    }
}

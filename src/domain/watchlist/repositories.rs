use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use futures::channel::mpsc::UnboundedReceiver;
use futures::future::LocalBoxFuture;

use crate::domain::errors::StoreError;
use crate::domain::watchlist::entities::{WatchlistDraft, WatchlistItem, WatchlistItemId, WatchlistSnapshot};

/// Real-time watchlist store.
///
/// `subscribe` behaves like an observed query: the current record set is
/// delivered right away, then again after every change.
pub trait WatchlistStore {
    fn create(&self, draft: WatchlistDraft) -> LocalBoxFuture<'_, Result<WatchlistItem, StoreError>>;

    fn delete(&self, id: &WatchlistItemId) -> LocalBoxFuture<'_, Result<(), StoreError>>;

    fn subscribe(&self) -> WatchlistSubscription;
}

/// Handle on a store subscription.
///
/// Snapshots arrive as a stream. Dropping the handle, or calling
/// [`WatchlistSubscription::unsubscribe`], detaches it from the store.
#[derive(Debug)]
pub struct WatchlistSubscription {
    receiver: UnboundedReceiver<WatchlistSnapshot>,
}

impl WatchlistSubscription {
    pub fn new(receiver: UnboundedReceiver<WatchlistSnapshot>) -> Self {
        Self { receiver }
    }

    /// Next snapshot if one is already queued
    pub fn try_next_snapshot(&mut self) -> Option<WatchlistSnapshot> {
        self.receiver.try_recv().ok()
    }

    /// Most recent queued snapshot, skipping older ones
    pub fn latest_snapshot(&mut self) -> Option<WatchlistSnapshot> {
        let mut latest = None;
        while let Some(snapshot) = self.try_next_snapshot() {
            latest = Some(snapshot);
        }
        latest
    }

    pub fn unsubscribe(mut self) {
        self.receiver.close();
    }
}

impl Stream for WatchlistSubscription {
    type Item = WatchlistSnapshot;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.receiver).poll_next(cx)
    }
}

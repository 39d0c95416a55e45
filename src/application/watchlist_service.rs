use std::rc::Rc;

use crate::domain::{
    errors::AppResult,
    logging::{LogComponent, get_logger},
    token::{TokenId, TokenInfo},
    watchlist::{WatchlistDraft, WatchlistItem, WatchlistItemId, WatchlistSnapshot, WatchlistStore, WatchlistSubscription},
};

/// Watchlist use cases over an injected store
#[derive(Clone)]
pub struct WatchlistService {
    store: Rc<dyn WatchlistStore>,
}

impl WatchlistService {
    pub fn new(store: Rc<dyn WatchlistStore>) -> Self {
        Self { store }
    }

    /// Add the picked token. Nothing picked is not an error, just a no-op.
    pub async fn add_token(&self, token: Option<&TokenInfo>) -> AppResult<Option<WatchlistItem>> {
        let Some(token) = token else {
            get_logger().debug(LogComponent::Application("WatchlistService"), "add requested without a selection");
            return Ok(None);
        };

        match self.store.create(WatchlistDraft::from(token)).await {
            Ok(item) => Ok(Some(item)),
            Err(error) => {
                get_logger().warn(
                    LogComponent::Application("WatchlistService"),
                    &format!("Failed to add {} to watchlist: {}", token.id, error),
                );
                Err(error.into())
            }
        }
    }

    pub async fn remove(&self, id: &WatchlistItemId) -> AppResult<()> {
        self.store.delete(id).await.map_err(|error| {
            get_logger().warn(
                LogComponent::Application("WatchlistService"),
                &format!("Failed to remove {} from watchlist: {}", id, error),
            );
            error.into()
        })
    }

    pub fn subscribe(&self) -> WatchlistSubscription {
        self.store.subscribe()
    }

    /// Token to chart when a watchlist row is clicked
    pub fn chart_target(item: &WatchlistItem) -> Option<TokenId> {
        if item.token_id.value().trim().is_empty() {
            None
        } else {
            Some(item.token_id.clone())
        }
    }
}

/// The single owned copy of the watchlist a view renders from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchlistState {
    items: WatchlistSnapshot,
    revision: u64,
}

impl WatchlistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, snapshot: WatchlistSnapshot) {
        self.items = snapshot;
        self.revision += 1;
    }

    /// Apply every snapshot already queued on `subscription`; returns whether any arrived
    pub fn drain(&mut self, subscription: &mut WatchlistSubscription) -> bool {
        match subscription.latest_snapshot() {
            Some(snapshot) => {
                self.apply(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[WatchlistItem] {
        &self.items
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

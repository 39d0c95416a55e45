use std::cell::RefCell;

use crate::domain::{
    errors::InfrastructureError,
    logging::{LogComponent, get_logger},
    token::{TokenInfo, TokenListRepository},
};
use crate::infrastructure::sequencing::{RequestSequencer, RequestTicket};

/// What a finished fetch did to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogUpdate {
    /// The token list was replaced; carries the new length
    Replaced(usize),
    /// The fetch failed; the previous list is still served
    Retained,
    /// A newer fetch was started meanwhile; the result was dropped
    Stale,
}

/// Last-good token list.
///
/// Fetch failures never clear the list, and only the most recently started
/// fetch may replace it. There is no retry: a failed first load leaves the
/// catalog empty until the next explicit refresh.
#[derive(Debug, Default)]
pub struct TokenCatalog {
    tokens: Vec<TokenInfo>,
    sequencer: RequestSequencer,
    last_error: Option<InfrastructureError>,
}

impl TokenCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(tokens: Vec<TokenInfo>) -> Self {
        Self { tokens, ..Self::default() }
    }

    pub fn tokens(&self) -> &[TokenInfo] {
        &self.tokens
    }

    pub fn last_error(&self) -> Option<&InfrastructureError> {
        self.last_error.as_ref()
    }

    /// Start a fetch; any earlier outstanding ticket becomes stale
    pub fn begin_refresh(&self) -> RequestTicket {
        self.sequencer.begin()
    }

    pub fn apply(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<TokenInfo>, InfrastructureError>,
    ) -> CatalogUpdate {
        if !self.sequencer.is_current(ticket) {
            get_logger().debug(
                LogComponent::Application("TokenCatalog"),
                &format!("dropping stale token list response #{}", ticket.value()),
            );
            return CatalogUpdate::Stale;
        }

        match result {
            Ok(tokens) => {
                self.tokens = tokens;
                self.last_error = None;
                CatalogUpdate::Replaced(self.tokens.len())
            }
            Err(error) => {
                get_logger().warn(
                    LogComponent::Application("TokenCatalog"),
                    &format!("⚠️ Token list fetch failed, keeping {} cached tokens: {}", self.tokens.len(), error),
                );
                self.last_error = Some(error);
                CatalogUpdate::Retained
            }
        }
    }

    /// Fetch from `repository` and apply the result. The catalog is only
    /// borrowed around the await, never across it.
    pub async fn refresh<R>(catalog: &RefCell<TokenCatalog>, repository: &R) -> CatalogUpdate
    where
        R: TokenListRepository + ?Sized,
    {
        let ticket = catalog.borrow().begin_refresh();
        let result = repository.fetch_tokens().await;
        catalog.borrow_mut().apply(ticket, result)
    }
}

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

use crate::domain::token::entities::TokenInfo;
use crate::domain::token::value_objects::TokenId;

/// Store-assigned identifier of a watchlist record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WatchlistItemId(String);

impl WatchlistItemId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WatchlistItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Fields a client supplies when creating a watchlist record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistDraft {
    pub token_id: TokenId,
    pub symbol: String,
    pub name: String,
}

impl From<&TokenInfo> for WatchlistDraft {
    fn from(token: &TokenInfo) -> Self {
        Self {
            token_id: token.id.clone(),
            symbol: token.symbol.clone(),
            name: token.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub id: WatchlistItemId,
    pub token_id: TokenId,
    pub symbol: String,
    pub name: String,
}

impl WatchlistItem {
    pub fn from_draft(id: WatchlistItemId, draft: WatchlistDraft) -> Self {
        Self {
            id,
            token_id: draft.token_id,
            symbol: draft.symbol,
            name: draft.name,
        }
    }

    /// "SYM | name", the same text the token picker shows
    pub fn label(&self) -> String {
        format!("{} | {}", self.symbol.to_uppercase(), self.name)
    }
}

/// Full record set as delivered by a subscription
pub type WatchlistSnapshot = Vec<WatchlistItem>;

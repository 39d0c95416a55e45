use serde::{Deserialize, Serialize};

use crate::domain::listbox::ListOption;
use crate::domain::token::value_objects::TokenId;

/// Token descriptor delivered by the token list endpoint.
///
/// Identity is the `id`; two descriptors with the same id are the same
/// option even if the endpoint renamed the token in between.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub id: TokenId,
    pub name: String,
    pub symbol: String,
}

impl TokenInfo {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: TokenId::from(id.into()),
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// `BTC | Bitcoin` - the text the picker filters on and shows once chosen
    pub fn label(&self) -> String {
        format!("{} | {}", self.symbol.to_uppercase(), self.name)
    }

    /// `BTC | Bitcoin | bitcoin` - the text of a dropdown row
    pub fn row_text(&self) -> String {
        format!("{} | {} | {}", self.symbol.to_uppercase(), self.name, self.id)
    }
}

impl PartialEq for TokenInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl std::hash::Hash for TokenInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl ListOption for TokenInfo {
    fn option_id(&self) -> &str {
        self.id.value()
    }

    fn option_label(&self) -> String {
        self.label()
    }
}

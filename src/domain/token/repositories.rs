use futures::future::LocalBoxFuture;

use crate::domain::errors::InfrastructureError;
use crate::domain::token::entities::TokenInfo;

/// Read-only source of the ordered token list
pub trait TokenListRepository {
    fn fetch_tokens(&self) -> LocalBoxFuture<'_, Result<Vec<TokenInfo>, InfrastructureError>>;
}

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;

use crate::domain::{
    errors::{InfrastructureError, NetworkError, RepositoryError},
    logging::{LogComponent, get_logger},
    token::{TokenInfo, TokenListRepository},
};

pub const DEFAULT_TOKEN_LIST_URL: &str = "http://localhost:3000/token/list";

/// HTTP client for the token list endpoint
#[derive(Debug, Clone)]
pub struct TokenListHttpClient {
    endpoint: String,
}

impl Default for TokenListHttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_LIST_URL)
    }
}

impl TokenListHttpClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the ordered token list
    pub async fn fetch_token_list(&self) -> Result<Vec<TokenInfo>, InfrastructureError> {
        get_logger().debug(
            LogComponent::Infrastructure("TokenListHttpClient"),
            &format!("📡 Fetching token list from {}", self.endpoint),
        );

        let response = Request::get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| NetworkError::HttpRequestFailed(format!("Failed to send request: {e}")))?;

        if !response.ok() {
            return Err(NetworkError::HttpStatus {
                status: response.status(),
                text: response.status_text(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| NetworkError::HttpRequestFailed(format!("Failed to read body: {e}")))?;
        let tokens = parse_token_list(&body)?;

        get_logger().info(
            LogComponent::Infrastructure("TokenListHttpClient"),
            &format!("✅ Received {} tokens", tokens.len()),
        );
        Ok(tokens)
    }
}

impl TokenListRepository for TokenListHttpClient {
    fn fetch_tokens(&self) -> LocalBoxFuture<'_, Result<Vec<TokenInfo>, InfrastructureError>> {
        self.fetch_token_list().boxed_local()
    }
}

/// Decode the endpoint payload: a JSON array of `{id, name, symbol}`.
/// Extra fields are ignored.
pub fn parse_token_list(body: &str) -> Result<Vec<TokenInfo>, InfrastructureError> {
    serde_json::from_str(body)
        .map_err(|e| RepositoryError::ParseError(format!("Invalid token list payload: {e}")).into())
}

use derive_more::{Display, Deref, From, Into};
use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Value Object - stable token identifier as issued by the token list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Deref, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::InvalidTokenId("token id cannot be empty".to_string()));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TokenId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - label shared by a contiguous run of list options
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into)]
pub struct GroupLabel(String);

impl GroupLabel {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupLabel {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<char> for GroupLabel {
    fn from(value: char) -> Self {
        Self(value.to_string())
    }
}

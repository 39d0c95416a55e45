use strum::{AsRefStr, Display, EnumString};

use crate::domain::token::entities::TokenInfo;
use crate::domain::token::value_objects::GroupLabel;

/// Where the query has to occur inside the option label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum MatchFrom {
    #[default]
    Any,
    Start,
}

/// Autocomplete filter over token labels.
///
/// Matching is case-insensitive against [`TokenInfo::label`]; surrounding
/// whitespace in the query is ignored and an empty query keeps every token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenFilter {
    pub match_from: MatchFrom,
    pub limit: Option<usize>,
}

impl TokenFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_match_from(mut self, match_from: MatchFrom) -> Self {
        self.match_from = match_from;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, token: &TokenInfo, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let haystack = token.label().to_lowercase();
        match self.match_from {
            MatchFrom::Any => haystack.contains(&needle),
            MatchFrom::Start => haystack.starts_with(&needle),
        }
    }

    /// Filter preserving the caller's ordering
    pub fn apply(&self, tokens: &[TokenInfo], query: &str) -> Vec<TokenInfo> {
        let matching = tokens.iter().filter(|token| self.matches(token, query)).cloned();
        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}

/// Groups tokens by the first character of their upper-cased symbol.
/// Tokens with an empty symbol stay ungrouped.
pub fn group_by_initial(token: &TokenInfo) -> Option<GroupLabel> {
    token
        .symbol
        .trim()
        .chars()
        .next()
        .map(|initial| GroupLabel::from(initial.to_ascii_uppercase()))
}

pub mod token_catalog;
pub mod watchlist_service;

pub use token_catalog::*;
pub use watchlist_service::*;

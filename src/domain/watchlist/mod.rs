//! Watchlist aggregate: records and the store boundary.

pub mod entities;
pub mod repositories;

pub use entities::*;
pub use repositories::*;

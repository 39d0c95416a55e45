pub mod http;
pub mod rendering;
pub mod sequencing;
pub mod services;
pub mod watchlist_store;

pub use http::{TokenListHttpClient, parse_token_list};
pub use sequencing::{RequestSequencer, RequestTicket};
pub use watchlist_store::InMemoryWatchlistStore;

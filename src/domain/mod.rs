pub mod chart;
pub mod errors;
pub mod listbox;
pub mod logging;
pub mod token;
pub mod watchlist;

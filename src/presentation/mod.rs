pub mod add_token_dialog;
pub mod indicator_charts;
pub mod virtualized_autocomplete;
pub mod wasm_api;
pub mod watchlist_view;

pub use add_token_dialog::AddTokenDialog;
pub use indicator_charts::IndicatorCharts;
pub use virtualized_autocomplete::{
    RenderedRow, RowContent, RowIdentity, RowKey, VirtualizedAutocomplete, rendered_rows,
};
pub use wasm_api::{DashboardHandle, mount_dashboard, parse_datasets};
pub use watchlist_view::WatchlistView;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use crate::{
    application::{CatalogUpdate, TokenCatalog, WatchlistService},
    config::AppConfig,
    domain::{
        chart::ChartDataset,
        logging::{LogComponent, get_logger},
        token::{TokenId, TokenInfo, TokenListRepository},
        watchlist::WatchlistStore,
    },
    infrastructure::{InMemoryWatchlistStore, TokenListHttpClient},
    presentation::{IndicatorCharts, WatchlistView},
};

/// Root view. Builds the store, the token list client and the catalog and
/// hands them down explicitly; nothing here lives in a global.
#[component]
pub fn App(
    config: AppConfig,
    datasets: RwSignal<Vec<ChartDataset>>,
    chart_token: RwSignal<Option<TokenId>>,
) -> impl IntoView {
    let store: Rc<dyn WatchlistStore> = Rc::new(InMemoryWatchlistStore::new());
    let service = WatchlistService::new(store);
    let client: Rc<dyn TokenListRepository> = Rc::new(TokenListHttpClient::new(config.token_list_url.clone()));
    let catalog = Rc::new(RefCell::new(TokenCatalog::new()));
    let tokens = create_rw_signal(Vec::<TokenInfo>::new());
    let loading = create_rw_signal(false);

    let refresh = store_value(move || {
        let client = Rc::clone(&client);
        let catalog = Rc::clone(&catalog);
        loading.set(true);
        spawn_local(async move {
            match TokenCatalog::refresh(&catalog, client.as_ref()).await {
                CatalogUpdate::Replaced(count) => {
                    get_logger().info(LogComponent::Presentation("App"), &format!("Loaded {} tokens", count));
                    tokens.set(catalog.borrow().tokens().to_vec());
                    loading.set(false);
                }
                CatalogUpdate::Retained => loading.set(false),
                CatalogUpdate::Stale => {}
            }
        });
    });
    refresh.with_value(|refresh| refresh());

    let on_chart = move |token: TokenId| {
        get_logger().info(LogComponent::Presentation("App"), &format!("Charting {}", token));
        chart_token.set(Some(token));
    };

    view! {
        <main class="dashboard">
            <header class="dashboard-header">
                <h1>"Token Watchlist"</h1>
                <button
                    disabled=move || loading.get()
                    on:click=move |_| refresh.with_value(|refresh| refresh())
                >
                    "Reload tokens"
                </button>
            </header>
            <WatchlistView service=service tokens=tokens on_chart=on_chart config=config.list.clone() />
            <section class="chart-panel">
                <h2>
                    {move || match chart_token.get() {
                        Some(token) => format!("Indicators for {}", token),
                        None => "Select a token to chart".to_string(),
                    }}
                </h2>
                <IndicatorCharts datasets=datasets />
            </section>
        </main>
    }
}

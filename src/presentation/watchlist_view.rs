use futures::StreamExt;
use futures::future::{AbortHandle, Abortable};
use leptos::*;

use crate::application::{WatchlistService, WatchlistState};
use crate::domain::{
    listbox::ListConfig,
    logging::{LogComponent, get_logger},
    token::{TokenId, TokenInfo},
    watchlist::WatchlistItem,
};
use crate::presentation::add_token_dialog::AddTokenDialog;

/// Live watchlist with add and delete controls.
///
/// Subscribes on mount and renders whatever the store last published. The
/// subscription task is aborted on unmount, which drops the receiver and
/// unsubscribes. Clicking an entry reports its token through `on_chart`.
#[component]
pub fn WatchlistView(
    service: WatchlistService,
    #[prop(into)] tokens: Signal<Vec<TokenInfo>>,
    #[prop(into)] on_chart: Callback<TokenId>,
    #[prop(optional)] config: Option<ListConfig>,
) -> impl IntoView {
    let state = create_rw_signal(WatchlistState::new());
    let dialog_open = create_rw_signal(false);
    let service = store_value(service);

    let (abort_handle, registration) = AbortHandle::new_pair();
    let mut subscription = service.with_value(|service| service.subscribe());
    spawn_local(async move {
        let updates = async move {
            while let Some(snapshot) = subscription.next().await {
                state.update(|state| state.apply(snapshot));
            }
        };
        if Abortable::new(updates, registration).await.is_err() {
            get_logger().debug(LogComponent::Presentation("WatchlistView"), "watchlist subscription closed");
        }
    });
    on_cleanup(move || abort_handle.abort());

    let add = move |choice: Option<TokenInfo>| {
        let service = service.get_value();
        spawn_local(async move {
            // Failures are already logged by the service; the list stays as published.
            let _ = service.add_token(choice.as_ref()).await;
        });
    };

    let remove = move |item: WatchlistItem| {
        let service = service.get_value();
        spawn_local(async move {
            let _ = service.remove(&item.id).await;
        });
    };

    let chart = move |item: &WatchlistItem| {
        if let Some(token) = WatchlistService::chart_target(item) {
            on_chart.call(token);
        }
    };

    view! {
        <section class="watchlist">
            <header class="watchlist-header">
                <h2>"Watchlist"</h2>
                <button on:click=move |_| dialog_open.set(true)>"Add Token"</button>
            </header>
            <Show
                when=move || !state.with(WatchlistState::is_empty)
                fallback=|| view! { <p class="watchlist-empty">"No tokens yet"</p> }
            >
                <ul class="watchlist-items">
                    <For
                        each=move || state.with(|state| state.items().to_vec())
                        key=|item| item.id.clone()
                        children=move |item: WatchlistItem| {
                            let for_chart = item.clone();
                            let for_remove = item.clone();
                            view! {
                                <li class="watchlist-item">
                                    <span class="watchlist-item-label" on:click=move |_| chart(&for_chart)>
                                        {item.label()}
                                    </span>
                                    <button
                                        class="watchlist-item-delete"
                                        aria-label="Delete"
                                        on:click=move |_| remove(for_remove.clone())
                                    >
                                        "Delete"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
            <AddTokenDialog open=dialog_open tokens=tokens on_add=add config=config.unwrap_or_default() />
        </section>
    }
}

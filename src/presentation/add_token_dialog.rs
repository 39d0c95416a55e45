use leptos::*;

use crate::domain::{
    listbox::{GroupOf, ListConfig},
    token::{TokenInfo, group_by_initial},
};
use crate::presentation::virtualized_autocomplete::VirtualizedAutocomplete;

/// Modal for picking a token to add. "Add" hands the current pick (possibly
/// `None`) to `on_add`; both buttons close the dialog.
#[component]
pub fn AddTokenDialog(
    open: RwSignal<bool>,
    #[prop(into)] tokens: Signal<Vec<TokenInfo>>,
    #[prop(into)] on_add: Callback<Option<TokenInfo>>,
    #[prop(optional)] config: Option<ListConfig>,
    #[prop(optional)] grouped: bool,
) -> impl IntoView {
    let selection = create_rw_signal::<Option<TokenInfo>>(None);
    let config = config.unwrap_or_default();
    let group_of: Option<GroupOf<TokenInfo>> = if grouped { Some(group_by_initial) } else { None };

    let close = move || {
        selection.set(None);
        open.set(false);
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop">
                <div class="dialog" role="dialog" aria-labelledby="add-token-title">
                    <h2 id="add-token-title">"Add Token"</h2>
                    <VirtualizedAutocomplete
                        options=tokens
                        on_select={move |choice: Option<TokenInfo>| selection.set(choice)}
                        group_of=group_of
                        config=config.clone()
                    />
                    <div class="dialog-actions">
                        <button on:click=move |_| close()>"Cancel"</button>
                        <button on:click=move |_| {
                            on_add.call(selection.get_untracked());
                            close();
                        }>"Add"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

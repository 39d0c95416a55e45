use leptos::html::Div;
use leptos::*;

use crate::domain::{
    listbox::{
        FlattenedRow, FlattenedRows, GroupOf, KeyOutcome, ListConfig, NavKey, SequenceId, ViewportWindow,
        VirtualListModel,
    },
    logging::LogComponent,
    token::{TokenFilter, TokenId, TokenInfo},
};
use crate::event_utils::{on_window_resize, window_inner_size};
use crate::log_trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowContent {
    Header(String),
    Option { text: String, highlighted: bool },
}

/// What a rendered row stands for: a group header or one token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowIdentity {
    Header(String),
    Token(TokenId),
}

/// A row positioned for rendering inside the listbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub sequence: SequenceId,
    pub index: usize,
    pub identity: RowIdentity,
    pub top: u32,
    pub height: u32,
    pub content: RowContent,
}

/// `<For>` key of a rendered row
pub type RowKey = (SequenceId, usize, RowIdentity, u32, u32, bool);

impl RenderedRow {
    /// Changes whenever the row has to be redrawn, including when a new
    /// sequence puts a different token at the same index.
    pub fn key(&self) -> RowKey {
        let highlighted = matches!(self.content, RowContent::Option { highlighted: true, .. });
        (self.sequence, self.index, self.identity.clone(), self.top, self.height, highlighted)
    }
}

/// Resolve the windowed slice into drawable rows, shifted down by the listbox padding
pub fn rendered_rows(
    rows: &FlattenedRows<TokenInfo>,
    window: &ViewportWindow,
    highlighted: Option<usize>,
    padding: u32,
) -> Vec<RenderedRow> {
    window
        .rows
        .iter()
        .filter_map(|slot| {
            let (identity, content) = match rows.get(slot.index)? {
                FlattenedRow::GroupHeader(label) => {
                    (RowIdentity::Header(label.to_string()), RowContent::Header(label.to_string()))
                }
                FlattenedRow::OptionRow { option, .. } => (
                    RowIdentity::Token(option.id.clone()),
                    RowContent::Option { text: option.row_text(), highlighted: highlighted == Some(slot.index) },
                ),
            };
            Some(RenderedRow {
                sequence: rows.id(),
                index: slot.index,
                identity,
                top: slot.top + padding,
                height: slot.height,
                content,
            })
        })
        .collect()
}

/// Token search field with a windowed, optionally grouped dropdown.
///
/// `on_select` receives the committed token, or `None` when the choice is
/// cleared. Only the rows around the scroll position exist in the DOM.
#[component]
pub fn VirtualizedAutocomplete(
    #[prop(into)] options: Signal<Vec<TokenInfo>>,
    #[prop(into)] on_select: Callback<Option<TokenInfo>>,
    #[prop(default = None)] group_of: Option<GroupOf<TokenInfo>>,
    #[prop(optional)] config: Option<ListConfig>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let padding = config.padding;
    let filter = TokenFilter::new();

    let query = create_rw_signal(String::new());
    let selected_label = create_rw_signal::<Option<String>>(None);
    let open = create_rw_signal(false);
    let model = create_rw_signal(VirtualListModel::new(config, group_of));
    let window = create_rw_signal::<Option<ViewportWindow>>(None);
    let listbox_ref = create_node_ref::<Div>();

    // Once a token is chosen its label sits in the input; reopening must list
    // everything again instead of just that token.
    let filtered = create_memo(move |_| {
        let query = query.get();
        let effective = if selected_label.with(|label| label.as_deref() == Some(query.as_str())) {
            ""
        } else {
            query.as_str()
        };
        options.with(|tokens| filter.apply(tokens, effective))
    });

    let refresh_window = move || {
        let mut next = None;
        model.update(|list| next = list.window());
        window.set(next);
    };

    let measure = move || {
        let viewport_width = window_inner_size().0.max(0.0) as u32;
        let container_width = listbox_ref
            .get_untracked()
            .map(|listbox| listbox.client_width().max(0) as u32)
            .unwrap_or(0);
        model.update(|list| list.observe_layout(viewport_width, container_width));
        refresh_window();
    };

    let sync_dom_scroll = move || {
        let offset = model.with_untracked(|list| list.scroll_offset());
        if let Some(listbox) = listbox_ref.get_untracked() {
            listbox.set_scroll_top(offset as i32);
        }
    };

    create_effect(move |_| {
        let tokens = filtered.get();
        model.update(|list| list.set_options(&tokens));
        sync_dom_scroll();
        log_trace!(LogComponent::Presentation("Autocomplete"), "{} tokens match", tokens.len());
        measure();
    });

    // Hidden listboxes report zero width; measure again once the popup is laid out.
    create_effect(move |_| {
        if open.get() {
            request_animation_frame(move || {
                sync_dom_scroll();
                measure();
            });
        }
    });

    let resize_listener = on_window_resize(move |_| measure());
    on_cleanup(move || resize_listener.remove());

    let commit = move |choice: Option<TokenInfo>| {
        if let Some(token) = &choice {
            let label = token.label();
            selected_label.set(Some(label.clone()));
            query.set(label);
        }
        open.set(false);
        on_select.call(choice);
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let Some(key) = NavKey::from_key(&ev.key()) else {
            return;
        };
        if !open.get_untracked() {
            if matches!(key, NavKey::ArrowDown | NavKey::ArrowUp) {
                ev.prevent_default();
                open.set(true);
            }
            return;
        }
        ev.prevent_default();

        let mut committed: Option<Option<TokenInfo>> = None;
        let mut outcome = KeyOutcome::Ignored;
        model.update(|list| outcome = list.handle_key(key, &mut |choice| committed = Some(choice)));

        match outcome {
            KeyOutcome::Highlighted(_) => {
                sync_dom_scroll();
                refresh_window();
            }
            KeyOutcome::Committed(_) => {
                if let Some(choice) = committed {
                    commit(choice);
                }
            }
            KeyOutcome::Dismissed => open.set(false),
            KeyOutcome::Ignored => {}
        }
    };

    let on_scroll = move |_| {
        if let Some(listbox) = listbox_ref.get_untracked() {
            let offset = listbox.scroll_top().max(0) as u32;
            model.update(|list| list.on_scroll(offset));
            refresh_window();
        }
    };

    let visible_rows = create_memo(move |_| {
        let highlighted = model.with(|list| list.highlighted());
        window.with(|current| match current {
            Some(current) => model.with(|list| rendered_rows(list.rows(), current, highlighted, padding)),
            None => Vec::new(),
        })
    });

    let listbox_height = move || model.with(|list| list.listbox_height());
    let content_height = move || {
        window.with(|current| current.as_ref().map_or(0, |current| current.content_height + 2 * padding))
    };
    let show_listbox = move || open.get() && !filtered.with(Vec::is_empty);

    view! {
        <div class="token-autocomplete">
            <label class="token-autocomplete-label" for="search-input">
                {label.unwrap_or_else(|| "Search Token".to_string())}
            </label>
            <input
                id="search-input"
                type="search"
                autocomplete="off"
                role="combobox"
                aria-expanded=move || show_listbox().to_string()
                prop:value=move || query.get()
                on:input=move |ev| {
                    query.set(event_target_value(&ev));
                    open.set(true);
                }
                on:focus=move |_| open.set(true)
                on:blur=move |_| open.set(false)
                on:keydown=on_keydown
            />
            <div
                class="token-listbox"
                role="listbox"
                node_ref=listbox_ref
                style="position: relative; overflow-y: auto; box-sizing: border-box;"
                style:display=move || if show_listbox() { "block" } else { "none" }
                style:height=move || format!("{}px", listbox_height())
                on:scroll=on_scroll
            >
                <ul
                    style="position: relative; margin: 0; padding: 0; list-style: none;"
                    style:height=move || format!("{}px", content_height())
                >
                    <For
                        each=move || visible_rows.get()
                        key=|row| row.key()
                        children=move |row: RenderedRow| {
                            let index = row.index;
                            let style = format!(
                                "position: absolute; left: 0; right: 0; top: {}px; height: {}px;",
                                row.top, row.height
                            );
                            match row.content {
                                RowContent::Header(text) => view! {
                                    <li class="token-listbox-header" role="presentation" style=style>{text}</li>
                                }.into_view(),
                                RowContent::Option { text, highlighted } => view! {
                                    <li
                                        class="token-listbox-option"
                                        class:highlighted=highlighted
                                        role="option"
                                        aria-selected=highlighted.to_string()
                                        style=style
                                        on:mousedown={move |ev: ev::MouseEvent| ev.prevent_default()}
                                        on:mouseenter=move |_| {
                                            let mut moved = false;
                                            model.update(|list| moved = list.hover(index));
                                            if moved {
                                                refresh_window();
                                            }
                                        }
                                        on:click=move |_| {
                                            let mut committed = None;
                                            model.update(|list| {
                                                list.select_row(index, &mut |choice| committed = Some(choice));
                                            });
                                            if let Some(choice) = committed {
                                                commit(choice);
                                            }
                                        }
                                    >
                                        {text}
                                    </li>
                                }.into_view(),
                            }
                        }
                    />
                </ul>
            </div>
        </div>
    }
}

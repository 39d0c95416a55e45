use token_watchlist_wasm::domain::listbox::{
    FlattenedRows, KeyOutcome, ListConfig, ListNavigator, NavKey, SelectionAdapter, VirtualListModel, flatten,
};
use token_watchlist_wasm::domain::token::{TokenInfo, group_by_initial};
use wasm_bindgen_test::*;

// Rows: [A] ada algo [B] btc bnb [C] celo
fn grouped_rows() -> (Vec<TokenInfo>, FlattenedRows<TokenInfo>) {
    let options = vec![
        TokenInfo::new("cardano", "ada", "Cardano"),
        TokenInfo::new("algorand", "algo", "Algorand"),
        TokenInfo::new("bitcoin", "btc", "Bitcoin"),
        TokenInfo::new("binancecoin", "bnb", "BNB"),
        TokenInfo::new("celo", "celo", "Celo"),
    ];
    let rows = flatten(&options, Some(group_by_initial));
    (options, rows)
}

fn press(
    navigator: &mut ListNavigator,
    key: NavKey,
    rows: &FlattenedRows<TokenInfo>,
    adapter: &SelectionAdapter,
) -> KeyOutcome {
    navigator.handle_key(key, rows, adapter, 2, &mut |_| {})
}

#[wasm_bindgen_test(unsupported = test)]
fn header_click_selects_nothing() {
    let (_, rows) = grouped_rows();
    let adapter = SelectionAdapter::new(&rows);
    let mut calls = 0;
    assert!(!adapter.select_row(&rows, 0, &mut |_| calls += 1));
    assert!(!adapter.select_row(&rows, 3, &mut |_| calls += 1));
    assert_eq!(calls, 0);
}

#[wasm_bindgen_test(unsupported = test)]
fn option_click_reports_the_matching_option() {
    let (options, rows) = grouped_rows();
    let adapter = SelectionAdapter::new(&rows);
    let mut picked = None;
    assert!(adapter.select_row(&rows, 4, &mut |choice| picked = choice));
    assert_eq!(picked.as_ref(), Some(&options[2]));
    assert_eq!(adapter.option_index(&rows, 4), Some(2));
    assert_eq!(adapter.option_index(&rows, 3), None);
}

#[wasm_bindgen_test(unsupported = test)]
fn out_of_range_row_is_a_no_op() {
    let (_, rows) = grouped_rows();
    let adapter = SelectionAdapter::new(&rows);
    assert!(!adapter.select_row(&rows, 99, &mut |_| panic!("must not be called")));
}

#[wasm_bindgen_test(unsupported = test)]
fn clear_reports_no_selection() {
    let (_, rows) = grouped_rows();
    let adapter = SelectionAdapter::new(&rows);
    let mut picked = Some(TokenInfo::new("x", "x", "x"));
    adapter.clear(&mut |choice| picked = choice);
    assert!(picked.is_none());
}

#[wasm_bindgen_test(unsupported = test)]
fn arrow_keys_skip_headers() {
    let (_, rows) = grouped_rows();
    let adapter = SelectionAdapter::new(&rows);
    assert_eq!(adapter.selectable_rows(), &[1, 2, 4, 5, 7]);

    let mut navigator = ListNavigator::new();
    let visited: Vec<KeyOutcome> = (0..5).map(|_| press(&mut navigator, NavKey::ArrowDown, &rows, &adapter)).collect();
    assert_eq!(
        visited,
        vec![
            KeyOutcome::Highlighted(1),
            KeyOutcome::Highlighted(2),
            KeyOutcome::Highlighted(4),
            KeyOutcome::Highlighted(5),
            KeyOutcome::Highlighted(7),
        ]
    );
    assert_eq!(press(&mut navigator, NavKey::ArrowUp, &rows, &adapter), KeyOutcome::Highlighted(5));
    assert_eq!(press(&mut navigator, NavKey::ArrowUp, &rows, &adapter), KeyOutcome::Highlighted(4));
    assert_eq!(press(&mut navigator, NavKey::ArrowUp, &rows, &adapter), KeyOutcome::Highlighted(2));
}

#[wasm_bindgen_test(unsupported = test)]
fn navigation_does_not_wrap() {
    let (_, rows) = grouped_rows();
    let adapter = SelectionAdapter::new(&rows);
    let mut navigator = ListNavigator::new();

    press(&mut navigator, NavKey::End, &rows, &adapter);
    assert_eq!(press(&mut navigator, NavKey::ArrowDown, &rows, &adapter), KeyOutcome::Highlighted(7));

    press(&mut navigator, NavKey::Home, &rows, &adapter);
    assert_eq!(press(&mut navigator, NavKey::ArrowUp, &rows, &adapter), KeyOutcome::Highlighted(1));
}

#[wasm_bindgen_test(unsupported = test)]
fn arrow_up_from_nothing_starts_at_the_end() {
    let (_, rows) = grouped_rows();
    let adapter = SelectionAdapter::new(&rows);
    let mut navigator = ListNavigator::new();
    assert_eq!(press(&mut navigator, NavKey::ArrowUp, &rows, &adapter), KeyOutcome::Highlighted(7));
}

#[wasm_bindgen_test(unsupported = test)]
fn page_keys_jump_by_options_not_rows() {
    let (_, rows) = grouped_rows();
    let adapter = SelectionAdapter::new(&rows);
    let mut navigator = ListNavigator::new();
    press(&mut navigator, NavKey::Home, &rows, &adapter);
    assert_eq!(press(&mut navigator, NavKey::PageDown, &rows, &adapter), KeyOutcome::Highlighted(4));
    assert_eq!(press(&mut navigator, NavKey::PageDown, &rows, &adapter), KeyOutcome::Highlighted(7));
    assert_eq!(press(&mut navigator, NavKey::PageUp, &rows, &adapter), KeyOutcome::Highlighted(4));
}

#[wasm_bindgen_test(unsupported = test)]
fn enter_commits_highlighted_option() {
    let (options, rows) = grouped_rows();
    let adapter = SelectionAdapter::new(&rows);
    let mut navigator = ListNavigator::new();
    assert_eq!(press(&mut navigator, NavKey::Enter, &rows, &adapter), KeyOutcome::Ignored);

    navigator.hover(&adapter, 5);
    let mut picked = None;
    let outcome = navigator.handle_key(NavKey::Enter, &rows, &adapter, 2, &mut |choice| picked = choice);
    assert_eq!(outcome, KeyOutcome::Committed(5));
    assert_eq!(picked.as_ref(), Some(&options[3]));
}

#[wasm_bindgen_test(unsupported = test)]
fn hovering_a_header_keeps_the_highlight() {
    let (_, rows) = grouped_rows();
    let adapter = SelectionAdapter::new(&rows);
    let mut navigator = ListNavigator::new();
    assert!(navigator.hover(&adapter, 2));
    assert!(!navigator.hover(&adapter, 3));
    assert_eq!(navigator.highlighted(), Some(2));
}

#[wasm_bindgen_test(unsupported = test)]
fn escape_dismisses_and_unknown_keys_are_ignored() {
    let (_, rows) = grouped_rows();
    let adapter = SelectionAdapter::new(&rows);
    let mut navigator = ListNavigator::new();
    assert_eq!(press(&mut navigator, NavKey::Escape, &rows, &adapter), KeyOutcome::Dismissed);
    assert_eq!(NavKey::from_key("Tab"), None);
    assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::ArrowDown));
}

#[wasm_bindgen_test(unsupported = test)]
fn model_keeps_keyboard_highlight_in_view() {
    let options: Vec<TokenInfo> =
        (0..40).map(|i| TokenInfo::new(format!("t{i}"), format!("s{i}"), format!("Token {i}"))).collect();
    let mut model = VirtualListModel::new(ListConfig::default(), None);
    model.set_options(&options);
    model.observe_layout(1024, 320);
    assert_eq!(model.listbox_height(), 8 * 36 + 16);

    for _ in 0..12 {
        model.handle_key(NavKey::ArrowDown, &mut |_| {});
    }
    assert_eq!(model.highlighted(), Some(11));
    let window = model.window().unwrap();
    assert!(window.visible.contains(&11));

    model.set_options(&options[..3]);
    assert_eq!(model.highlighted(), None);
    assert_eq!(model.listbox_height(), 3 * 36 + 16);
}

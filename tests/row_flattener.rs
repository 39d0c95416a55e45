use quickcheck_macros::quickcheck;
use token_watchlist_wasm::domain::listbox::{FlattenedRow, flatten, flatten_ungrouped};
use token_watchlist_wasm::domain::token::{GroupLabel, TokenInfo, group_by_initial};
use wasm_bindgen_test::*;

fn token(id: &str, symbol: &str) -> TokenInfo {
    TokenInfo::new(id, symbol, format!("{symbol} token"))
}

fn alternating(count: usize) -> Vec<TokenInfo> {
    (0..count)
        .map(|i| {
            let symbol = if i % 2 == 0 { "AAA" } else { "BBB" };
            token(&format!("id-{i}"), symbol)
        })
        .collect()
}

#[wasm_bindgen_test(unsupported = test)]
fn single_ungrouped_option_yields_one_row() {
    let rows = flatten_ungrouped(&[TokenInfo::new("bitcoin", "btc", "Bitcoin")]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows.header_count(), 0);
    match rows.get(0) {
        Some(FlattenedRow::OptionRow { option, option_index }) => {
            assert_eq!(option.row_text(), "BTC | Bitcoin | bitcoin");
            assert_eq!(*option_index, 0);
        }
        other => panic!("expected option row, got {other:?}"),
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn alternating_groups_get_a_header_per_run() {
    let options = alternating(20);
    let rows = flatten(&options, Some(group_by_initial));
    assert_eq!(rows.option_count(), 20);
    assert_eq!(rows.header_count(), 20);
    assert_eq!(rows.len(), 40);
    for (i, pair) in rows.rows().chunks(2).enumerate() {
        let expected = if i % 2 == 0 { "A" } else { "B" };
        assert_eq!(pair[0], FlattenedRow::GroupHeader(GroupLabel::from(expected)));
        assert_eq!(pair[1].option_index(), Some(i));
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn contiguous_group_shares_one_header() {
    let options = vec![token("a1", "ada"), token("a2", "algo"), token("b1", "btc")];
    let rows = flatten(&options, Some(group_by_initial));
    let headers: Vec<_> = rows
        .iter()
        .filter_map(|row| match row {
            FlattenedRow::GroupHeader(label) => Some(label.value().to_string()),
            FlattenedRow::OptionRow { .. } => None,
        })
        .collect();
    assert_eq!(headers, vec!["A", "B"]);
    assert_eq!(rows.len(), 5);
}

#[wasm_bindgen_test(unsupported = test)]
fn unlabelled_option_breaks_a_run() {
    let options = vec![token("a1", "ada"), token("blank", ""), token("a2", "algo")];
    let rows = flatten(&options, Some(group_by_initial));
    let kinds: Vec<bool> = rows.iter().map(FlattenedRow::is_header).collect();
    assert_eq!(kinds, vec![true, false, false, true, false]);
}

#[wasm_bindgen_test(unsupported = test)]
fn empty_input_flattens_to_nothing() {
    let rows = flatten(&Vec::<TokenInfo>::new(), Some(group_by_initial));
    assert!(rows.is_empty());
    assert_eq!(rows.option_count(), 0);
}

#[wasm_bindgen_test(unsupported = test)]
fn reflattening_is_equal_but_not_identical() {
    let options = alternating(6);
    let first = flatten(&options, Some(group_by_initial));
    let second = flatten(&options, Some(group_by_initial));
    assert_eq!(first, second);
    assert_ne!(first.id(), second.id());
}

#[quickcheck]
fn options_keep_their_order(symbols: Vec<u8>) -> bool {
    let options: Vec<TokenInfo> = symbols
        .iter()
        .enumerate()
        .map(|(i, byte)| token(&format!("t{i}"), &char::from(b'a' + byte % 4).to_string()))
        .collect();
    let rows = flatten(&options, Some(group_by_initial));
    let indices: Vec<usize> = rows.iter().filter_map(FlattenedRow::option_index).collect();
    indices == (0..options.len()).collect::<Vec<_>>()
}

#[quickcheck]
fn every_header_starts_a_new_run(symbols: Vec<u8>) -> bool {
    let options: Vec<TokenInfo> = symbols
        .iter()
        .enumerate()
        .map(|(i, byte)| token(&format!("t{i}"), &char::from(b'a' + byte % 3).to_string()))
        .collect();
    let rows = flatten(&options, Some(group_by_initial));
    let runs = options
        .windows(2)
        .filter(|pair| group_by_initial(&pair[0]) != group_by_initial(&pair[1]))
        .count()
        + usize::from(!options.is_empty());

    let headers_precede_options = rows.rows().windows(2).all(|pair| !(pair[0].is_header() && pair[1].is_header()));
    rows.header_count() == runs && headers_precede_options
}

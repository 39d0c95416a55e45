use quickcheck_macros::quickcheck;
use token_watchlist_wasm::domain::listbox::{
    Breakpoint, FlattenedRows, ListConfig, RowHeightPolicy, ViewportWindower, WindowerState, flatten,
    flatten_ungrouped,
};
use token_watchlist_wasm::domain::token::{TokenInfo, group_by_initial};
use wasm_bindgen_test::*;

const VIEWPORT: u32 = 8 * 36;

fn options(count: usize) -> Vec<TokenInfo> {
    (0..count)
        .map(|i| {
            let symbol = format!("{}{i}", char::from(b'a' + (i / 3 % 26) as u8));
            TokenInfo::new(format!("id-{i}"), symbol.clone(), symbol)
        })
        .collect()
}

fn wide() -> RowHeightPolicy {
    RowHeightPolicy::new(Breakpoint::Wide, &ListConfig::default())
}

fn measured_windower() -> ViewportWindower {
    let mut windower = ViewportWindower::default();
    windower.observe_layout(320, VIEWPORT);
    windower
}

fn expected_tops(rows: &FlattenedRows<TokenInfo>, policy: &RowHeightPolicy) -> Vec<u32> {
    rows.iter()
        .scan(0, |top, row| {
            let current = *top;
            *top += policy.row_height(row);
            Some(current)
        })
        .collect()
}

#[wasm_bindgen_test(unsupported = test)]
fn no_window_before_first_layout() {
    let rows = flatten_ungrouped(&options(10));
    let mut windower = ViewportWindower::default();
    assert_eq!(windower.state(), WindowerState::Uninitialized);
    assert!(windower.window(&rows, &wide()).is_none());
}

#[wasm_bindgen_test(unsupported = test)]
fn zero_width_layout_is_deferred() {
    let rows = flatten_ungrouped(&options(10));
    let mut windower = ViewportWindower::default();
    windower.observe_layout(0, VIEWPORT);
    assert_eq!(windower.state(), WindowerState::Uninitialized);
    assert!(windower.window(&rows, &wide()).is_none());

    windower.observe_layout(320, VIEWPORT);
    assert_eq!(windower.state(), WindowerState::Measured);
    assert!(windower.window(&rows, &wide()).is_some());
    assert_eq!(windower.state(), WindowerState::Windowing);
}

#[wasm_bindgen_test(unsupported = test)]
fn top_of_list_renders_viewport_plus_overscan() {
    let rows = flatten_ungrouped(&options(100));
    let mut windower = measured_windower();
    let window = windower.window(&rows, &wide()).unwrap();
    assert_eq!(window.visible, 0..8);
    assert_eq!(window.rendered, 0..13);
    assert_eq!(window.rows.len(), 13);
    assert_eq!(window.content_height, 3600);
}

#[wasm_bindgen_test(unsupported = test)]
fn scrolled_window_has_overscan_on_both_sides() {
    let rows = flatten_ungrouped(&options(100));
    let policy = wide();
    let mut windower = measured_windower();
    windower.on_scroll(360, &rows, &policy);
    let window = windower.window(&rows, &policy).unwrap();
    assert_eq!(window.visible, 10..18);
    assert_eq!(window.rendered, 5..23);
    assert_eq!(window.rows[0].top, 180);
}

#[wasm_bindgen_test(unsupported = test)]
fn scroll_is_clamped_to_content() {
    let rows = flatten_ungrouped(&options(100));
    let policy = wide();
    let mut windower = measured_windower();
    windower.on_scroll(100_000, &rows, &policy);
    assert_eq!(windower.scroll_offset(), 3600 - VIEWPORT);
    let window = windower.window(&rows, &policy).unwrap();
    assert_eq!(window.rendered.end, 100);
    assert_eq!(window.visible.end, 100);
}

#[wasm_bindgen_test(unsupported = test)]
fn empty_sequence_renders_nothing() {
    let rows = flatten_ungrouped(&Vec::<TokenInfo>::new());
    let mut windower = measured_windower();
    let window = windower.window(&rows, &wide()).unwrap();
    assert!(window.is_empty());
    assert_eq!(window.scroll_offset, 0);
    assert_eq!(window.content_height, 0);
}

#[wasm_bindgen_test(unsupported = test)]
fn new_sequence_of_same_length_resets_measurements() {
    let policy = wide();
    let grouped = flatten(&options(30), Some(group_by_initial));
    let mut windower = measured_windower();
    windower.window(&grouped, &policy);
    assert!(windower.measured_rows() > 0);

    assert!(!windower.sync(&grouped, &policy));
    let rebuilt = flatten(&options(30), Some(group_by_initial));
    assert!(windower.sync(&rebuilt, &policy));
    assert_eq!(windower.measured_rows(), 0);
}

#[wasm_bindgen_test(unsupported = test)]
fn policy_change_resets_measurements() {
    let rows = flatten_ungrouped(&options(30));
    let mut windower = measured_windower();
    windower.window(&rows, &wide());
    let narrow = RowHeightPolicy::new(Breakpoint::Narrow, &ListConfig::default());
    assert!(windower.sync(&rows, &narrow));
    let window = windower.window(&rows, &narrow).unwrap();
    assert_eq!(window.rows[1].top, 48);
}

#[wasm_bindgen_test(unsupported = test)]
fn offsets_follow_the_new_sequence_after_regrouping() {
    let policy = wide();
    let mut windower = measured_windower();
    let before = flatten_ungrouped(&options(40));
    windower.window(&before, &policy);

    let after = flatten(&options(40), Some(group_by_initial));
    let tops = expected_tops(&after, &policy);
    let window = windower.window(&after, &policy).unwrap();
    for row in &window.rows {
        assert_eq!(row.top, tops[row.index]);
        assert_eq!(row.height, policy.row_height(after.get(row.index).unwrap()));
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn scroll_to_row_scrolls_minimally() {
    let rows = flatten_ungrouped(&options(100));
    let policy = wide();
    let mut windower = measured_windower();

    windower.scroll_to_row(3, &rows, &policy);
    assert_eq!(windower.scroll_offset(), 0);

    windower.scroll_to_row(20, &rows, &policy);
    assert_eq!(windower.scroll_offset(), 21 * 36 - VIEWPORT);

    windower.scroll_to_row(2, &rows, &policy);
    assert_eq!(windower.scroll_offset(), 72);
}

#[quickcheck]
fn rendered_range_is_visible_range_plus_overscan(count: u8, scroll: u16) -> bool {
    let rows = flatten(&options(usize::from(count)), Some(group_by_initial));
    let policy = wide();
    let mut windower = measured_windower();
    windower.on_scroll(u32::from(scroll), &rows, &policy);
    let Some(window) = windower.window(&rows, &policy) else {
        return false;
    };
    if rows.is_empty() {
        return window.is_empty();
    }
    let overscan = windower.overscan();
    !window.visible.is_empty()
        && window.rendered.start == window.visible.start.saturating_sub(overscan)
        && window.rendered.end == (window.visible.end + overscan).min(rows.len())
        && window.rows.len() == window.rendered.len()
}

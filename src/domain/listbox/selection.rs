use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::domain::listbox::rows::{FlattenedRow, FlattenedRows};

/// Keys the dropdown reacts to, named after `KeyboardEvent.key`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Home,
    End,
    PageDown,
    PageUp,
    Enter,
    Escape,
}

impl NavKey {
    pub fn from_key(key: &str) -> Option<Self> {
        key.parse().ok()
    }
}

/// Result of feeding a key to the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Highlight moved to this flattened row
    Highlighted(usize),
    /// The highlighted option was handed to the selection callback
    Committed(usize),
    /// Popup should close without a selection
    Dismissed,
    Ignored,
}

/// Maps flattened rows back to options.
///
/// Built from one flattened sequence; header rows have no option and can
/// neither be selected nor highlighted.
#[derive(Debug, Clone, Default)]
pub struct SelectionAdapter {
    selectable: Vec<usize>,
}

impl SelectionAdapter {
    pub fn new<T>(rows: &FlattenedRows<T>) -> Self {
        let selectable = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.is_header())
            .map(|(index, _)| index)
            .collect();
        Self { selectable }
    }

    /// Flattened indices of option rows, ascending
    pub fn selectable_rows(&self) -> &[usize] {
        &self.selectable
    }

    pub fn is_selectable(&self, row: usize) -> bool {
        self.selectable.binary_search(&row).is_ok()
    }

    /// Index into the caller's option sequence for flattened row `row`
    pub fn option_index<T>(&self, rows: &FlattenedRows<T>, row: usize) -> Option<usize> {
        rows.get(row).and_then(FlattenedRow::option_index)
    }

    /// Invoke `on_select` with the option at flattened row `row`.
    /// Headers and out-of-range rows are a no-op; returns whether the callback ran.
    pub fn select_row<T: Clone>(
        &self,
        rows: &FlattenedRows<T>,
        row: usize,
        on_select: &mut dyn FnMut(Option<T>),
    ) -> bool {
        match rows.get(row).and_then(FlattenedRow::option) {
            Some(option) => {
                on_select(Some(option.clone()));
                true
            }
            None => false,
        }
    }

    /// Report an explicit "no selection"
    pub fn clear<T>(&self, on_select: &mut dyn FnMut(Option<T>)) {
        on_select(None);
    }

    fn position(&self, row: usize) -> Result<usize, usize> {
        self.selectable.binary_search(&row)
    }

    fn first(&self) -> Option<usize> {
        self.selectable.first().copied()
    }

    fn last(&self) -> Option<usize> {
        self.selectable.last().copied()
    }

    /// Selectable row `steps` positions after `row`, clamped at the end
    fn forward(&self, row: usize, steps: usize) -> Option<usize> {
        let start = match self.position(row) {
            Ok(position) => position + steps,
            Err(insert_at) => insert_at + steps.saturating_sub(1),
        };
        self.selectable.get(start.min(self.selectable.len().checked_sub(1)?)).copied()
    }

    /// Selectable row `steps` positions before `row`, clamped at the start
    fn backward(&self, row: usize, steps: usize) -> Option<usize> {
        let position = match self.position(row) {
            Ok(position) => position.saturating_sub(steps),
            Err(insert_at) => insert_at.checked_sub(1)?.saturating_sub(steps.saturating_sub(1)),
        };
        self.selectable.get(position).copied()
    }
}

/// Keyboard highlight over a flattened list. Never wraps around.
#[derive(Debug, Clone, Default)]
pub struct ListNavigator {
    highlighted: Option<usize>,
}

impl ListNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn reset(&mut self) {
        self.highlighted = None;
    }

    /// Highlight a row under the pointer; headers are ignored
    pub fn hover(&mut self, adapter: &SelectionAdapter, row: usize) -> bool {
        if adapter.is_selectable(row) {
            self.highlighted = Some(row);
            true
        } else {
            false
        }
    }

    /// Apply a navigation key. `page` is the number of options a page jump skips.
    pub fn handle_key<T: Clone>(
        &mut self,
        key: NavKey,
        rows: &FlattenedRows<T>,
        adapter: &SelectionAdapter,
        page: usize,
        on_select: &mut dyn FnMut(Option<T>),
    ) -> KeyOutcome {
        let page = page.max(1);
        let target = match (key, self.highlighted) {
            (NavKey::Escape, _) => return KeyOutcome::Dismissed,
            (NavKey::Enter, Some(row)) => {
                return if adapter.select_row(rows, row, on_select) {
                    KeyOutcome::Committed(row)
                } else {
                    KeyOutcome::Ignored
                };
            }
            (NavKey::Enter, None) => return KeyOutcome::Ignored,
            (NavKey::ArrowDown, None) | (NavKey::Home, _) => adapter.first(),
            (NavKey::ArrowUp, None) | (NavKey::End, _) => adapter.last(),
            (NavKey::PageDown, None) => adapter.first().and_then(|first| adapter.forward(first, page - 1)),
            (NavKey::PageUp, None) => adapter.last().and_then(|last| adapter.backward(last, page - 1)),
            (NavKey::ArrowDown, Some(row)) => adapter.forward(row, 1),
            (NavKey::ArrowUp, Some(row)) => adapter.backward(row, 1),
            (NavKey::PageDown, Some(row)) => adapter.forward(row, page),
            (NavKey::PageUp, Some(row)) => adapter.backward(row, page),
        };
        match target {
            Some(row) => {
                self.highlighted = Some(row);
                KeyOutcome::Highlighted(row)
            }
            None => KeyOutcome::Ignored,
        }
    }
}

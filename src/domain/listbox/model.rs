use crate::domain::listbox::rows::{FlattenedRows, flatten};
use crate::domain::listbox::selection::{KeyOutcome, ListNavigator, NavKey, SelectionAdapter};
use crate::domain::listbox::sizing::{Breakpoint, ListConfig, RowHeightPolicy};
use crate::domain::listbox::windower::{ViewportWindow, ViewportWindower, WindowerState};
use crate::domain::logging::LogComponent;
use crate::domain::token::value_objects::GroupLabel;
use crate::log_trace;

/// Grouping rule for [`VirtualListModel`]; must be pure
pub type GroupOf<T> = fn(&T) -> Option<GroupLabel>;

/// Everything the virtualized dropdown needs between renders.
///
/// Owns the flattened sequence derived from the caller's options together
/// with the windower and keyboard state bound to it. Replacing the options
/// rebuilds all derived state, scroll position included: a new sequence is
/// always shown from its first row.
#[derive(Debug, Clone)]
pub struct VirtualListModel<T> {
    config: ListConfig,
    group_of: Option<GroupOf<T>>,
    rows: FlattenedRows<T>,
    selection: SelectionAdapter,
    navigator: ListNavigator,
    windower: ViewportWindower,
    policy: RowHeightPolicy,
}

impl<T: Clone> VirtualListModel<T> {
    pub fn new(config: ListConfig, group_of: Option<GroupOf<T>>) -> Self {
        let policy = RowHeightPolicy::new(Breakpoint::Wide, &config);
        Self {
            windower: ViewportWindower::new(config.overscan),
            config,
            group_of,
            rows: FlattenedRows::empty(),
            selection: SelectionAdapter::default(),
            navigator: ListNavigator::new(),
            policy,
        }
    }

    /// Replace the option set (already filtered and sorted by the caller)
    pub fn set_options(&mut self, options: &[T]) {
        self.rows = flatten(options, self.group_of);
        self.selection = SelectionAdapter::new(&self.rows);
        self.navigator.reset();
        self.windower.sync(&self.rows, &self.policy);
        self.windower.on_scroll(0, &self.rows, &self.policy);
        log_trace!(
            LogComponent::Domain("VirtualList"),
            "flattened {} options into {} rows",
            self.rows.option_count(),
            self.rows.len()
        );
        self.refresh_viewport_height();
    }

    /// Layout pass. The breakpoint is resolved once from the viewport width;
    /// the list container's own width decides whether windowing can start.
    pub fn observe_layout(&mut self, viewport_width: u32, container_width: u32) {
        self.policy = RowHeightPolicy::for_viewport_width(viewport_width, &self.config);
        let display_height = self.policy.display_height(&self.rows);
        self.windower.observe_layout(container_width, display_height);
    }

    pub fn on_scroll(&mut self, offset: u32) {
        self.windower.on_scroll(offset, &self.rows, &self.policy);
    }

    pub fn window(&mut self) -> Option<ViewportWindow> {
        self.windower.window(&self.rows, &self.policy)
    }

    pub fn rows(&self) -> &FlattenedRows<T> {
        &self.rows
    }

    pub fn policy(&self) -> &RowHeightPolicy {
        &self.policy
    }

    pub fn state(&self) -> WindowerState {
        self.windower.state()
    }

    pub fn scroll_offset(&self) -> u32 {
        self.windower.scroll_offset()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.navigator.highlighted()
    }

    pub fn content_height(&self) -> u32 {
        self.policy.content_height(&self.rows)
    }

    /// Height of the scrolling window, capped at `max_visible_rows` options
    pub fn display_height(&self) -> u32 {
        self.policy.display_height(&self.rows)
    }

    /// Outer listbox height: display height plus padding, zero when empty
    pub fn listbox_height(&self) -> u32 {
        if self.rows.is_empty() {
            0
        } else {
            self.display_height() + 2 * self.config.padding
        }
    }

    pub fn padding(&self) -> u32 {
        self.config.padding
    }

    pub fn hover(&mut self, row: usize) -> bool {
        self.navigator.hover(&self.selection, row)
    }

    /// Pointer commit on flattened row `row`
    pub fn select_row(&mut self, row: usize, on_select: &mut dyn FnMut(Option<T>)) -> bool {
        self.selection.select_row(&self.rows, row, on_select)
    }

    /// Keyboard input; keeps the highlighted row scrolled into view
    pub fn handle_key(&mut self, key: NavKey, on_select: &mut dyn FnMut(Option<T>)) -> KeyOutcome {
        let page = self.config.max_visible_rows as usize;
        let outcome = self.navigator.handle_key(key, &self.rows, &self.selection, page, on_select);
        if let KeyOutcome::Highlighted(row) = outcome {
            self.windower.scroll_to_row(row, &self.rows, &self.policy);
        }
        outcome
    }

    fn refresh_viewport_height(&mut self) {
        let container = self.windower.container();
        if container.width > 0 {
            self.windower.observe_layout(container.width, self.policy.display_height(&self.rows));
        }
    }
}

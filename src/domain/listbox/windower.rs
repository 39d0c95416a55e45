use std::ops::Range;

use crate::domain::listbox::rows::{FlattenedRows, SequenceId};
use crate::domain::listbox::sizing::{OVERSCAN_ROWS, RowHeightPolicy};
use crate::domain::logging::LogComponent;
use crate::log_debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowerState {
    /// No layout pass with a usable width yet
    Uninitialized,
    /// Container size known, nothing windowed yet
    Measured,
    Windowing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContainerSize {
    pub width: u32,
    pub height: u32,
}

/// One rendered row and where it sits in the scroll content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowedRow {
    pub index: usize,
    pub top: u32,
    pub height: u32,
}

impl WindowedRow {
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

/// The slice of rows to render for the current scroll position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportWindow {
    /// Rows intersecting the viewport, without overscan
    pub visible: Range<usize>,
    /// Rows to render, overscan included
    pub rendered: Range<usize>,
    pub rows: Vec<WindowedRow>,
    pub scroll_offset: u32,
    pub viewport_height: u32,
    pub content_height: u32,
}

impl ViewportWindow {
    pub fn empty(viewport_height: u32) -> Self {
        Self {
            visible: 0..0,
            rendered: 0..0,
            rows: Vec::new(),
            scroll_offset: 0,
            viewport_height,
            content_height: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowMetrics {
    offset: u32,
    size: u32,
}

impl RowMetrics {
    fn end(&self) -> u32 {
        self.offset + self.size
    }
}

/// What the cached measurements were taken against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MeasuredSequence {
    id: SequenceId,
    len: usize,
    policy: RowHeightPolicy,
}

/// Variable-height windowing over a flattened row sequence.
///
/// Row heights are measured lazily into a prefix-offset cache. The cache is
/// only valid for the sequence and height policy it was measured against:
/// [`ViewportWindower::sync`] drops it from index 0 as soon as either
/// changes, otherwise header and option rows drift out of alignment when the
/// filtered set changes.
#[derive(Debug, Clone)]
pub struct ViewportWindower {
    state: WindowerState,
    container: ContainerSize,
    scroll_offset: u32,
    overscan: usize,
    measured_for: Option<MeasuredSequence>,
    metrics: Vec<RowMetrics>,
}

impl Default for ViewportWindower {
    fn default() -> Self {
        Self::new(OVERSCAN_ROWS)
    }
}

impl ViewportWindower {
    pub fn new(overscan: usize) -> Self {
        Self {
            state: WindowerState::Uninitialized,
            container: ContainerSize::default(),
            scroll_offset: 0,
            overscan,
            measured_for: None,
            metrics: Vec::new(),
        }
    }

    pub fn state(&self) -> WindowerState {
        self.state
    }

    pub fn container(&self) -> ContainerSize {
        self.container
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Number of rows whose height is currently cached
    pub fn measured_rows(&self) -> usize {
        self.metrics.len()
    }

    /// Layout pass or resize. A zero width means the container is not laid
    /// out yet; the observation is dropped and windowing waits for the next one.
    pub fn observe_layout(&mut self, width: u32, height: u32) {
        if width == 0 {
            log_debug!(LogComponent::Domain("Windower"), "deferring windowing until container has a width");
            return;
        }
        self.container = ContainerSize { width, height };
        if self.state == WindowerState::Uninitialized {
            self.state = WindowerState::Measured;
        }
    }

    /// Drop cached measurements from `index` onwards
    pub fn reset_after_index(&mut self, index: usize) {
        self.metrics.truncate(index);
    }

    /// Bind the windower to `rows` measured under `policy`. Returns `true`
    /// when the cache had to be reset.
    pub fn sync<T>(&mut self, rows: &FlattenedRows<T>, policy: &RowHeightPolicy) -> bool {
        let current = MeasuredSequence { id: rows.id(), len: rows.len(), policy: *policy };
        if self.measured_for == Some(current) {
            return false;
        }
        self.reset_after_index(0);
        self.measured_for = Some(current);
        true
    }

    pub fn on_scroll<T>(&mut self, offset: u32, rows: &FlattenedRows<T>, policy: &RowHeightPolicy) {
        self.scroll_offset = offset.min(self.max_scroll_offset(rows, policy));
    }

    /// Scroll by the smallest amount that brings row `index` fully into view
    pub fn scroll_to_row<T>(&mut self, index: usize, rows: &FlattenedRows<T>, policy: &RowHeightPolicy) {
        if index >= rows.len() {
            return;
        }
        self.sync(rows, policy);
        self.measure_through(index, rows, policy);
        let row = self.metrics[index];
        let viewport = self.container.height;
        let target = if row.offset < self.scroll_offset {
            row.offset
        } else if row.end() > self.scroll_offset + viewport {
            row.end().saturating_sub(viewport)
        } else {
            self.scroll_offset
        };
        self.on_scroll(target, rows, policy);
    }

    /// Current window, `None` until a layout pass provided a width
    pub fn window<T>(&mut self, rows: &FlattenedRows<T>, policy: &RowHeightPolicy) -> Option<ViewportWindow> {
        if self.state == WindowerState::Uninitialized {
            return None;
        }
        self.state = WindowerState::Windowing;
        self.sync(rows, policy);

        let viewport_height = self.container.height;
        if rows.is_empty() {
            self.scroll_offset = 0;
            return Some(ViewportWindow::empty(viewport_height));
        }

        let content_height = policy.content_height(rows);
        self.scroll_offset = self.scroll_offset.min(content_height.saturating_sub(viewport_height));
        let top = self.scroll_offset;
        let bottom = top + viewport_height;

        self.measure_until_offset(bottom, rows, policy);
        let visible_start = self
            .metrics
            .partition_point(|row| row.end() <= top)
            .min(rows.len() - 1);
        let visible_end = self
            .metrics
            .partition_point(|row| row.offset < bottom)
            .max(visible_start + 1);

        let rendered_start = visible_start.saturating_sub(self.overscan);
        let rendered_end = (visible_end + self.overscan).min(rows.len());
        self.measure_through(rendered_end - 1, rows, policy);

        let windowed = (rendered_start..rendered_end)
            .map(|index| {
                let metrics = self.metrics[index];
                WindowedRow { index, top: metrics.offset, height: metrics.size }
            })
            .collect();

        Some(ViewportWindow {
            visible: visible_start..visible_end,
            rendered: rendered_start..rendered_end,
            rows: windowed,
            scroll_offset: self.scroll_offset,
            viewport_height,
            content_height,
        })
    }

    fn max_scroll_offset<T>(&self, rows: &FlattenedRows<T>, policy: &RowHeightPolicy) -> u32 {
        policy.content_height(rows).saturating_sub(self.container.height)
    }

    fn measure_through<T>(&mut self, index: usize, rows: &FlattenedRows<T>, policy: &RowHeightPolicy) {
        while self.metrics.len() <= index {
            if !self.measure_next(rows, policy) {
                break;
            }
        }
    }

    fn measure_until_offset<T>(&mut self, offset: u32, rows: &FlattenedRows<T>, policy: &RowHeightPolicy) {
        while self.metrics.last().is_none_or(|last| last.end() < offset) {
            if !self.measure_next(rows, policy) {
                break;
            }
        }
    }

    fn measure_next<T>(&mut self, rows: &FlattenedRows<T>, policy: &RowHeightPolicy) -> bool {
        let index = self.metrics.len();
        let Some(row) = rows.get(index) else {
            return false;
        };
        let offset = self.metrics.last().map_or(0, RowMetrics::end);
        self.metrics.push(RowMetrics { offset, size: policy.row_height(row) });
        true
    }
}

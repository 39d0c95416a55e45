use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::domain::errors::ConfigurationError;
use crate::domain::listbox::rows::{FlattenedRow, FlattenedRows};

pub const HEADER_HEIGHT_PX: u32 = 48;
pub const OPTION_HEIGHT_WIDE_PX: u32 = 36;
pub const OPTION_HEIGHT_NARROW_PX: u32 = 48;
pub const WIDE_BREAKPOINT_PX: u32 = 600;
pub const MAX_VISIBLE_ROWS: u32 = 8;
pub const OVERSCAN_ROWS: usize = 5;
pub const LISTBOX_PADDING_PX: u32 = 8;

/// Tunables of the dropdown list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub header_height: u32,
    pub option_height_wide: u32,
    pub option_height_narrow: u32,
    pub wide_breakpoint: u32,
    pub max_visible_rows: u32,
    pub overscan: usize,
    pub padding: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            header_height: HEADER_HEIGHT_PX,
            option_height_wide: OPTION_HEIGHT_WIDE_PX,
            option_height_narrow: OPTION_HEIGHT_NARROW_PX,
            wide_breakpoint: WIDE_BREAKPOINT_PX,
            max_visible_rows: MAX_VISIBLE_ROWS,
            overscan: OVERSCAN_ROWS,
            padding: LISTBOX_PADDING_PX,
        }
    }
}

impl ListConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let heights = [
            ("header_height", self.header_height),
            ("option_height_wide", self.option_height_wide),
            ("option_height_narrow", self.option_height_narrow),
            ("max_visible_rows", self.max_visible_rows),
        ];
        for (name, value) in heights {
            if value == 0 {
                return Err(ConfigurationError::InvalidParameter(format!("{name} must be positive")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Breakpoint {
    Narrow,
    Wide,
}

impl Breakpoint {
    pub fn from_width(width_px: u32, wide_from: u32) -> Self {
        if width_px >= wide_from { Breakpoint::Wide } else { Breakpoint::Narrow }
    }
}

/// Row heights for one render pass.
///
/// The breakpoint is resolved once when the policy is built; rows only look
/// up the resolved values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHeightPolicy {
    breakpoint: Breakpoint,
    header_height: u32,
    option_height: u32,
    max_visible_rows: u32,
}

impl RowHeightPolicy {
    pub fn new(breakpoint: Breakpoint, config: &ListConfig) -> Self {
        let option_height = match breakpoint {
            Breakpoint::Wide => config.option_height_wide,
            Breakpoint::Narrow => config.option_height_narrow,
        };
        Self {
            breakpoint,
            header_height: config.header_height,
            option_height,
            max_visible_rows: config.max_visible_rows,
        }
    }

    pub fn for_viewport_width(width_px: u32, config: &ListConfig) -> Self {
        Self::new(Breakpoint::from_width(width_px, config.wide_breakpoint), config)
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Height of a plain option row, the unit of the display cap
    pub fn option_height(&self) -> u32 {
        self.option_height
    }

    pub fn header_height(&self) -> u32 {
        self.header_height
    }

    pub fn row_height<T>(&self, row: &FlattenedRow<T>) -> u32 {
        if row.is_header() { self.header_height } else { self.option_height }
    }

    pub fn content_height<T>(&self, rows: &FlattenedRows<T>) -> u32 {
        rows.iter().map(|row| self.row_height(row)).sum()
    }

    /// Height of the scrolling window: the content, but never more than
    /// `max_visible_rows` option rows
    pub fn display_height<T>(&self, rows: &FlattenedRows<T>) -> u32 {
        self.content_height(rows).min(self.max_visible_rows * self.option_height)
    }
}

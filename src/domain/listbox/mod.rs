//! Virtualized, grouped dropdown list.
//!
//! The caller hands over an already filtered option sequence; this module
//! flattens it into header and option rows, sizes the rows, windows them for
//! the current scroll position and maps selections back to options.

pub mod model;
pub mod rows;
pub mod selection;
pub mod sizing;
pub mod windower;

pub use model::*;
pub use rows::*;
pub use selection::*;
pub use sizing::*;
pub use windower::*;

//! Indicator chart data and plot geometry.

pub mod value_objects;

pub use value_objects::*;

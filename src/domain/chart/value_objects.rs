use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// One indicator series: parallel vectors of timestamps (ms) and prices
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartDataset {
    pub timestamps_ms: Vec<f64>,
    pub prices: Vec<f64>,
}

impl ChartDataset {
    pub fn new(timestamps_ms: Vec<f64>, prices: Vec<f64>) -> Result<Self, ValidationError> {
        if timestamps_ms.len() != prices.len() {
            return Err(ValidationError::InvalidDataset(format!(
                "{} timestamps but {} prices",
                timestamps_ms.len(),
                prices.len()
            )));
        }
        Ok(Self { timestamps_ms, prices })
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.timestamps_ms.iter().copied().zip(self.prices.iter().copied())
    }
}

/// Plot size relative to the browser window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl ChartLayout {
    pub const WIDTH_RATIO: f64 = 0.8;
    pub const HEIGHT_RATIO: f64 = 0.5;
    pub const PADDING: f64 = 24.0;

    pub fn from_window(inner_width: f64, inner_height: f64) -> Self {
        Self {
            width: (inner_width * Self::WIDTH_RATIO).max(0.0),
            height: (inner_height * Self::HEIGHT_RATIO).max(0.0),
            padding: Self::PADDING,
        }
    }

    /// Map dataset points into canvas pixels (y grows downwards).
    /// A flat series or a single timestamp is centered on that axis.
    pub fn project(&self, dataset: &ChartDataset) -> Vec<(f64, f64)> {
        let Some(bounds) = Bounds::of(dataset) else {
            return Vec::new();
        };
        let plot_width = (self.width - 2.0 * self.padding).max(0.0);
        let plot_height = (self.height - 2.0 * self.padding).max(0.0);

        dataset
            .points()
            .map(|(time, price)| {
                let x = self.padding + bounds.time_ratio(time) * plot_width;
                let y = self.padding + (1.0 - bounds.price_ratio(price)) * plot_height;
                (x, y)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_time: f64,
    max_time: f64,
    min_price: f64,
    max_price: f64,
}

impl Bounds {
    fn of(dataset: &ChartDataset) -> Option<Self> {
        if dataset.is_empty() {
            return None;
        }
        let (mut min_time, mut max_time) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_price, mut max_price) = (f64::INFINITY, f64::NEG_INFINITY);
        for (time, price) in dataset.points() {
            min_time = min_time.min(time);
            max_time = max_time.max(time);
            min_price = min_price.min(price);
            max_price = max_price.max(price);
        }
        Some(Self { min_time, max_time, min_price, max_price })
    }

    fn time_ratio(&self, time: f64) -> f64 {
        ratio(time, self.min_time, self.max_time)
    }

    fn price_ratio(&self, price: f64) -> f64 {
        ratio(price, self.min_price, self.max_price)
    }
}

fn ratio(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range <= f64::EPSILON { 0.5 } else { (value - min) / range }
}

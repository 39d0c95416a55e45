use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::{ChartDataset, ChartLayout},
    logging::{LogComponent, get_logger},
};

const BACKGROUND: &str = "#1A1A28";
const LINE_COLOR: &str = "Red";
const MARKER_RADIUS: f64 = 3.0;

/// Canvas 2D line-and-marker plot for one indicator dataset
pub struct CanvasRenderer {
    layout: ChartLayout,
}

impl CanvasRenderer {
    pub fn new(layout: ChartLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    fn context(&self, canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
        canvas.set_width(self.layout.width as u32);
        canvas.set_height(self.layout.height as u32);

        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))
    }

    pub fn render(&self, canvas: &HtmlCanvasElement, dataset: &ChartDataset) -> Result<(), JsValue> {
        let context = self.context(canvas)?;
        let (width, height) = (self.layout.width, self.layout.height);

        context.clear_rect(0.0, 0.0, width, height);
        context.set_fill_style_str(BACKGROUND);
        context.fill_rect(0.0, 0.0, width, height);

        let points = self.layout.project(dataset);
        if points.is_empty() {
            get_logger().debug(LogComponent::Infrastructure("CanvasRenderer"), "empty dataset, nothing to plot");
            return Ok(());
        }

        context.set_stroke_style_str(LINE_COLOR);
        context.set_line_width(1.5);
        context.begin_path();
        for (index, &(x, y)) in points.iter().enumerate() {
            if index == 0 {
                context.move_to(x, y);
            } else {
                context.line_to(x, y);
            }
        }
        context.stroke();

        context.set_fill_style_str(LINE_COLOR);
        for &(x, y) in &points {
            context.begin_path();
            context.arc(x, y, MARKER_RADIUS, 0.0, std::f64::consts::TAU)?;
            context.fill();
        }

        get_logger().debug(
            LogComponent::Infrastructure("CanvasRenderer"),
            &format!("plotted {} points on {}x{} canvas", points.len(), width, height),
        );
        Ok(())
    }
}

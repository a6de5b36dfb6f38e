use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::chart::ChartSeries;
use crate::domain::logging::{LogComponent, get_logger};

/// Canvas 2D bar-chart renderer for the selection series.
pub struct BarChartRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl BarChartRenderer {
    pub fn new(canvas_id: String, width: u32, height: u32) -> Self {
        Self { canvas_id, width, height }
    }

    /// Get canvas element and context
    fn get_canvas_context(&self) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| JsValue::from_str("Canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("Failed to cast canvas element"))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("Failed to get 2D context"))?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))?;

        Ok((canvas, context))
    }

    /// Render the price bars for the current selection.
    pub fn render(&self, series: &ChartSeries) -> Result<(), JsValue> {
        let (_canvas, context) = self.get_canvas_context()?;

        let width = self.width as f64;
        let height = self.height as f64;

        context.clear_rect(0.0, 0.0, width, height);
        context.set_fill_style(&JsValue::from("#1a1a1a"));
        context.fill_rect(0.0, 0.0, width, height);

        if series.is_empty() {
            self.render_no_data_message(&context)?;
            return Ok(());
        }

        get_logger().debug(
            LogComponent::Infrastructure("BarChart"),
            &format!("Rendering {} bars", series.len()),
        );

        let padding = 40.0;
        let chart_width = width - padding * 2.0;
        let chart_height = height - padding * 2.0;
        let max_price = series.max_price().max(1.0);
        let slot_width = chart_width / series.len() as f64;
        let bar_width = (slot_width * 0.7).min(80.0);

        context.set_font("12px 'Courier New', monospace");
        context.set_text_align("center");

        for (index, point) in series.points().iter().enumerate() {
            let bar_height = (point.price / max_price) * chart_height;
            let x = padding + slot_width * index as f64 + (slot_width - bar_width) / 2.0;
            let y = height - padding - bar_height;

            context.set_fill_style(&JsValue::from("#72c685"));
            context.fill_rect(x, y, bar_width, bar_height);

            // id below the bar, price above it
            context.set_fill_style(&JsValue::from("#e0e0e0"));
            context.fill_text(
                &point.id.to_string(),
                x + bar_width / 2.0,
                height - padding + 16.0,
            )?;
            context.fill_text(
                &format!("${:.2}", point.price),
                x + bar_width / 2.0,
                (y - 6.0).max(12.0),
            )?;
        }

        // baseline
        context.set_stroke_style(&JsValue::from("#4a5d73"));
        context.begin_path();
        context.move_to(padding, height - padding);
        context.line_to(width - padding, height - padding);
        context.stroke();

        Ok(())
    }

    fn render_no_data_message(&self, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from("#a0a0a0"));
        context.set_font("16px 'Courier New', monospace");
        context.set_text_align("center");
        context.fill_text(
            "No rows selected",
            self.width as f64 / 2.0,
            self.height as f64 / 2.0,
        )?;
        Ok(())
    }
}

//! Small helpers around `HtmlCanvasElement` used by every visualization.

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

const FALLBACK_WIDTH: f64 = 800.0;

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
	canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("2d context unavailable"))?
		.dyn_into()
		.map_err(|_| JsValue::from_str("not a 2d context"))
}

/// Size the backing store to the parent's width and a fixed height.
pub fn fit_width(canvas: &HtmlCanvasElement, height: f64) -> (f64, f64) {
	let width = canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(FALLBACK_WIDTH);
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);
	(width, height)
}

/// Pointer position relative to the canvas' top-left corner.
pub fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Mount a canvas visualization, logging instead of panicking when the
/// browser can't provide a 2d context.
pub fn prepare(
	canvas: &HtmlCanvasElement,
	height: f64,
	name: &str,
) -> Option<(CanvasRenderingContext2d, f64, f64)> {
	let (w, h) = fit_width(canvas, height);
	match context_2d(canvas) {
		Ok(ctx) => {
			log::debug!("{name}: surface {w}x{h}");
			Some((ctx, w, h))
		}
		Err(err) => {
			log::warn!("{name}: no drawing surface: {:?}", err);
			None
		}
	}
}

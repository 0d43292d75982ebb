use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::ThreatMapState;

pub fn render(state: &ThreatMapState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	let radius = state.config.radius;

	ctx.set_global_alpha(0.7);
	for (idx, point, (x, y)) in state.layout.iter() {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&point.color);
		ctx.fill();

		if state.hover == Some(idx) {
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
			ctx.set_line_width(1.5);
			ctx.stroke();
		}
	}
	ctx.set_global_alpha(1.0);
}

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scale::{tick_label, tick_step};
use super::state::ChartState;

const LINE_COLOR: &str = "#00ffcc";
const AXIS_COLOR: &str = "#aaa";
const TICK_SIZE: f64 = 6.0;

pub fn render(state: &ChartState, opacity: f64, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.config.height);
	draw_axes(state, ctx);
	draw_line(state, opacity, ctx);
	draw_markers(state, ctx);
}

fn draw_line(state: &ChartState, opacity: f64, ctx: &CanvasRenderingContext2d) {
	let Some(&(x0, y0)) = state.markers.first() else {
		return;
	};
	ctx.set_global_alpha(opacity);
	ctx.set_stroke_style_str(LINE_COLOR);
	ctx.set_line_width(3.0);
	ctx.begin_path();
	ctx.move_to(x0, y0);
	for seg in &state.curve {
		ctx.bezier_curve_to(seg.c1.0, seg.c1.1, seg.c2.0, seg.c2.1, seg.end.0, seg.end.1);
	}
	ctx.stroke();
	ctx.set_global_alpha(1.0);
}

fn draw_markers(state: &ChartState, ctx: &CanvasRenderingContext2d) {
	ctx.set_global_alpha(0.7);
	ctx.set_fill_style_str(LINE_COLOR);
	for &(x, y) in &state.markers {
		ctx.begin_path();
		let _ = ctx.arc(x, y, state.config.marker_radius, 0.0, 2.0 * PI);
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_axes(state: &ChartState, ctx: &CanvasRenderingContext2d) {
	let (x, y) = (&state.x, &state.y);
	let (x_axis_y, y_axis_x) = (y.range.0, x.range.0);
	let count = state.config.ticks;

	ctx.set_stroke_style_str(AXIS_COLOR);
	ctx.set_fill_style_str(AXIS_COLOR);
	ctx.set_line_width(1.0);
	ctx.set_font("10px sans-serif");

	ctx.begin_path();
	ctx.move_to(x.range.0, x_axis_y);
	ctx.line_to(x.range.1, x_axis_y);
	ctx.move_to(y_axis_x, y.range.0);
	ctx.line_to(y_axis_x, y.range.1);
	ctx.stroke();

	let step = tick_step(x.domain.0, x.domain.1, count);
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	for v in x.ticks(count) {
		let px = x.apply(v);
		ctx.begin_path();
		ctx.move_to(px, x_axis_y);
		ctx.line_to(px, x_axis_y + TICK_SIZE);
		ctx.stroke();
		let _ = ctx.fill_text(&tick_label(v, step), px, x_axis_y + TICK_SIZE + 3.0);
	}

	let step = tick_step(y.domain.0, y.domain.1, count);
	ctx.set_text_align("right");
	ctx.set_text_baseline("middle");
	for v in y.ticks(count) {
		let py = y.apply(v);
		ctx.begin_path();
		ctx.move_to(y_axis_x - TICK_SIZE, py);
		ctx.line_to(y_axis_x, py);
		ctx.stroke();
		let _ = ctx.fill_text(&tick_label(v, step), y_axis_x - TICK_SIZE - 3.0, py);
	}
}

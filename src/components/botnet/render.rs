use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::BotnetState;
use crate::components::palette::category;

pub fn render(state: &BotnetState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_links(state: &BotnetState, ctx: &CanvasRenderingContext2d) {
	ctx.set_global_alpha(0.6);
	ctx.set_line_width(2.0);
	for &(source, target) in state.layout.links() {
		let (Some((x1, y1)), Some((x2, y2)), Some(node)) = (
			state.layout.position(source),
			state.layout.position(target),
			state.layout.node(source),
		) else {
			continue;
		};
		ctx.set_stroke_style_str(category(node.group));
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &BotnetState, ctx: &CanvasRenderingContext2d) {
	for (idx, node, (x, y)) in state.layout.iter() {
		ctx.begin_path();
		let _ = ctx.arc(x, y, state.radius(idx).max(0.0), 0.0, 2.0 * PI);
		ctx.set_fill_style_str(category(node.group));
		ctx.fill();

		if state.layout.is_pinned(idx) {
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
			ctx.set_line_width(2.0);
			ctx.stroke();
		}
	}
}

use web_sys::CanvasRenderingContext2d;

use super::state::{DIAMOND_SIZE, PulseState, glow_opacity};

pub fn render(state: &PulseState, now_ms: f64, ctx: &CanvasRenderingContext2d) {
	let (cx, cy) = state.center();
	let s = DIAMOND_SIZE;

	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(cx, cy);
	let _ = ctx.scale(state.scale, state.scale);
	let _ = ctx.rotate(state.angle);

	ctx.begin_path();
	ctx.move_to(0.0, -s);
	ctx.line_to(s, 0.0);
	ctx.line_to(0.0, s);
	ctx.line_to(-s, 0.0);
	ctx.close_path();
	ctx.set_fill_style_str(&format!("rgba(0, 255, 0, {})", glow_opacity(now_ms)));
	ctx.set_shadow_blur(20.0);
	ctx.set_shadow_color("rgba(0, 255, 0, 0.8)");
	ctx.fill();

	ctx.restore();
}

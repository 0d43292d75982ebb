/// Half-diagonal of the diamond, in pixels.
pub const DIAMOND_SIZE: f64 = 60.0;
const ROTATION_STEP: f64 = 0.03;

/// Idle scale at wall-clock `now_ms`: a sinusoid within `[0.9, 1.1]`.
pub fn idle_scale(now_ms: f64) -> f64 {
	1.0 + (now_ms / 1000.0).sin() * 0.1
}

/// Fill opacity at `now_ms`: a sinusoid within `[0.4, 1.0]`.
pub fn glow_opacity(now_ms: f64) -> f64 {
	0.7 + (now_ms / 500.0).sin() * 0.3
}

/// Scale while the pointer is `distance` pixels from the center.
pub fn reach_scale(distance: f64) -> f64 {
	1.0 + (distance / 200.0) * 0.1
}

/// Per-frame values for the pulsing diamond.
#[derive(Clone, Debug)]
pub struct PulseState {
	pub width: f64,
	pub height: f64,
	pub angle: f64,
	pub scale: f64,
}

impl PulseState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			angle: 0.0,
			scale: 1.0,
		}
	}

	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}

	/// Advance after a frame was drawn.
	pub fn advance(&mut self, now_ms: f64) {
		self.scale = idle_scale(now_ms);
		self.angle += ROTATION_STEP;
	}

	/// Override the scale for the next frame from the pointer's distance to center.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		let (cx, cy) = self.center();
		self.scale = reach_scale((x - cx).hypot(y - cy));
	}
}

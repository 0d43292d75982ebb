/// Energy below which a layout counts as settled and stops iterating.
pub const ALPHA_MIN: f64 = 0.001;
/// Energy a layout is raised to while dragging or on reheat.
pub const ALPHA_ACTIVE: f64 = 0.3;

/// Kinetic "temperature" of a layout.
///
/// Each step moves `alpha` a fixed fraction of the way toward `target`, so with a
/// zero target the layout cools over roughly 300 steps and then stops.
#[derive(Clone, Debug)]
pub struct Energy {
	pub alpha: f64,
	pub target: f64,
	decay: f64,
	running: bool,
}

impl Default for Energy {
	fn default() -> Self {
		Self {
			alpha: 1.0,
			target: 0.0,
			decay: 1.0 - ALPHA_MIN.powf(1.0 / 300.0),
			running: true,
		}
	}
}

impl Energy {
	/// Advance one step. Returns the alpha to apply this step, or `None` once settled.
	pub fn step(&mut self) -> Option<f64> {
		if !self.running {
			return None;
		}
		self.alpha += (self.target - self.alpha) * self.decay;
		if self.alpha < ALPHA_MIN {
			self.running = false;
		}
		Some(self.alpha)
	}

	pub fn set_target(&mut self, target: f64) {
		self.target = target;
	}

	pub fn restart(&mut self) {
		self.running = true;
	}

	pub fn reheat(&mut self, alpha: f64) {
		self.alpha = alpha;
		self.restart();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn settles_without_target() {
		let mut energy = Energy::default();
		let mut steps = 0;
		while energy.step().is_some() {
			steps += 1;
			assert!(steps < 1000, "energy never settled");
		}
		assert!(energy.step().is_none());
		assert!(energy.alpha < ALPHA_MIN);
		assert!((290..=310).contains(&steps));
	}

	#[test]
	fn stays_hot_while_target_is_raised() {
		let mut energy = Energy::default();
		energy.set_target(ALPHA_ACTIVE);
		for _ in 0..2000 {
			assert!(energy.step().is_some());
		}
		assert!((energy.alpha - ALPHA_ACTIVE).abs() < 1e-6);
	}

	#[test]
	fn reheat_resumes_a_settled_layout() {
		let mut energy = Energy::default();
		while energy.step().is_some() {}
		assert!(energy.step().is_none());

		energy.reheat(ALPHA_ACTIVE);
		let alpha = energy.step().unwrap();
		assert!(alpha < ALPHA_ACTIVE && alpha > 0.25);
	}
}

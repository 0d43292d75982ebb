use rand::Rng;

use super::types::{ThreatMapConfig, ThreatPoint};
use crate::components::force_layout::{ForceLayout, LayoutParams};
use crate::components::palette::interpolate_reds;
use crate::context::Reheat;

/// Scatter `count` points uniformly over the surface.
pub fn generate_points<R: Rng + ?Sized>(
	rng: &mut R,
	count: usize,
	width: f64,
	height: f64,
) -> Vec<(f64, f64, ThreatPoint)> {
	(0..count)
		.map(|_| {
			let (x, y) = (rng.gen_range(0.0..width), rng.gen_range(0.0..height));
			let point = ThreatPoint {
				id: format!("Threat_{}", rng.gen_range(0..1000)),
				color: interpolate_reds(rng.r#gen::<f64>()),
			};
			(x, y, point)
		})
		.collect()
}

pub struct ThreatMapState {
	pub layout: ForceLayout<ThreatPoint>,
	pub config: ThreatMapConfig,
	pub hover: Option<usize>,
	pub width: f64,
	pub height: f64,
}

impl ThreatMapState {
	pub fn new<R: Rng + ?Sized>(rng: &mut R, config: ThreatMapConfig, width: f64) -> Self {
		let height = config.height;
		let params = LayoutParams {
			charge: config.charge,
			spring: 0.0,
			collide_radius: config.collide_radius,
			..LayoutParams::default()
		};
		let mut layout = ForceLayout::new(params, width, height);
		for (x, y, point) in generate_points(rng, config.count, width, height) {
			layout.add_node(x, y, point);
		}
		log::info!("threat map: {} points", layout.len());
		Self {
			layout,
			config,
			hover: None,
			width,
			height,
		}
	}

	pub fn point_at(&self, x: f64, y: f64) -> Option<usize> {
		let radius = self.config.radius;
		self.layout.node_at(x, y, |_| radius)
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
		let Some(idx) = self.point_at(x, y) else {
			return false;
		};
		self.layout.begin_drag(idx, x, y);
		true
	}

	/// Update drag or hover. Returns the hovered point's label, if any.
	pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<String> {
		if self.layout.drag_to(x, y) {
			return self.hover_label();
		}
		self.hover = self.point_at(x, y);
		self.hover_label()
	}

	pub fn pointer_up(&mut self) {
		self.layout.end_drag();
	}

	pub fn pointer_leave(&mut self) {
		self.layout.end_drag();
		self.hover = None;
	}

	pub fn hover_label(&self) -> Option<String> {
		let point = self.layout.node(self.hover?)?;
		Some(format!("Threat ID: {}", point.id))
	}

	pub fn tick(&mut self, dt: f32) -> bool {
		self.layout.tick(dt)
	}
}

impl Reheat for ThreatMapState {
	fn reheat(&mut self, alpha: f64) {
		self.layout.reheat(alpha);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn points_land_inside_the_surface() {
		let mut rng = StdRng::seed_from_u64(7);
		let points = generate_points(&mut rng, 50, 640.0, 400.0);
		assert_eq!(points.len(), 50);
		for (x, y, point) in &points {
			assert!((0.0..640.0).contains(x));
			assert!((0.0..400.0).contains(y));
			let n: u32 = point.id.strip_prefix("Threat_").unwrap().parse().unwrap();
			assert!(n < 1000);
			assert!(point.color.starts_with("rgb("));
		}
	}

	#[test]
	fn same_seed_same_points() {
		let a = generate_points(&mut StdRng::seed_from_u64(9), 10, 300.0, 300.0);
		let b = generate_points(&mut StdRng::seed_from_u64(9), 10, 300.0, 300.0);
		let ids = |v: &[(f64, f64, ThreatPoint)]| {
			v.iter().map(|(x, y, p)| (*x, *y, p.id.clone())).collect::<Vec<_>>()
		};
		assert_eq!(ids(&a), ids(&b));
	}

	#[test]
	fn drag_pins_point_to_pointer_then_releases() {
		let mut state = ThreatMapState::new(
			&mut StdRng::seed_from_u64(11),
			ThreatMapConfig::default(),
			640.0,
		);
		let (px, py) = state.layout.position(0).unwrap();
		let target = state.point_at(px, py).unwrap();

		assert!(state.pointer_down(px, py));
		state.pointer_move(px + 40.0, py - 25.0);
		for _ in 0..10 {
			state.tick(0.016);
		}
		assert_eq!(state.layout.position(target), Some((px + 40.0, py - 25.0)));

		state.pointer_up();
		assert!(!state.layout.is_pinned(target));
	}

	#[test]
	fn grabbing_a_settled_map_wakes_it() {
		let mut state = ThreatMapState::new(
			&mut StdRng::seed_from_u64(14),
			ThreatMapConfig::default(),
			640.0,
		);
		while state.tick(0.016) {}
		assert!(!state.tick(0.016));

		let (x, y) = state.layout.position(0).unwrap();
		assert!(state.pointer_down(x, y));
		assert!(state.tick(0.016));

		state.pointer_up();
		let mut ticks = 0;
		while state.tick(0.016) {
			ticks += 1;
			assert!(ticks < 1000, "map never settled after release");
		}
	}

	#[test]
	fn hover_shows_and_hides_label() {
		let mut state = ThreatMapState::new(
			&mut StdRng::seed_from_u64(12),
			ThreatMapConfig::default(),
			640.0,
		);
		let (x, y) = state.layout.position(3).unwrap();
		let label = state.pointer_move(x, y).unwrap();
		assert!(label.starts_with("Threat ID: Threat_"));

		assert_eq!(state.pointer_move(-500.0, -500.0), None);
		assert!(state.pointer_move(x, y).is_some());
		state.pointer_leave();
		assert_eq!(state.hover_label(), None);
	}

	#[test]
	fn pointer_down_on_empty_space_does_nothing() {
		let mut state = ThreatMapState::new(
			&mut StdRng::seed_from_u64(13),
			ThreatMapConfig::default(),
			640.0,
		);
		assert!(!state.pointer_down(-100.0, -100.0));
		assert!(!state.layout.drag_to(1.0, 1.0));
	}
}

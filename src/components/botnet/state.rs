use rand::Rng;

use super::pulse::{PulseTimer, Transition, pulse_target};
use super::types::{BotNode, BotnetConfig, BotnetData};
use crate::components::force_layout::{ForceLayout, LayoutParams};
use crate::context::Reheat;

/// Random groups plus a chain of links `i -> i + 1`, each kept with
/// `config.link_probability`.
pub fn generate_botnet<R: Rng + ?Sized>(rng: &mut R, config: &BotnetConfig) -> BotnetData {
	let groups = config.groups.max(1);
	let nodes: Vec<BotNode> = (0..config.node_count)
		.map(|id| BotNode {
			id,
			group: rng.gen_range(0..groups),
		})
		.collect();

	let p = config.link_probability.clamp(0.0, 1.0);
	let links = (1..nodes.len())
		.filter(|_| rng.gen_bool(p))
		.map(|i| (i - 1, i))
		.collect();

	BotnetData { nodes, links }
}

pub struct BotnetState {
	pub layout: ForceLayout<BotNode>,
	pub config: BotnetConfig,
	pub width: f64,
	pub height: f64,
	radii: Vec<Transition>,
	timer: PulseTimer,
	now_ms: f64,
}

impl BotnetState {
	pub fn new(data: BotnetData, config: BotnetConfig, width: f64) -> Self {
		let height = config.height;
		let params = LayoutParams {
			charge: config.charge,
			link_distance: config.link_distance,
			collide_radius: config.collide_radius,
			..LayoutParams::default()
		};
		let mut layout = ForceLayout::new(params, width, height);

		// Start on a small ring so no two nodes coincide.
		let count = data.nodes.len().max(1) as f64;
		for (i, node) in data.nodes.into_iter().enumerate() {
			let angle = i as f64 * std::f64::consts::TAU / count;
			let (x, y) = (
				width / 2.0 + 60.0 * angle.cos(),
				height / 2.0 + 60.0 * angle.sin(),
			);
			layout.add_node(x, y, node);
		}
		for &(source, target) in &data.links {
			if !layout.add_link(source, target) {
				log::warn!("botnet: dropping link {source} -> {target}");
			}
		}
		log::info!(
			"botnet: {} nodes, {} links",
			layout.len(),
			layout.links().len()
		);

		let radii = vec![Transition::settled(config.base_radius); layout.len()];
		let timer = PulseTimer::new(config.pulse_interval_ms);
		Self {
			layout,
			config,
			width,
			height,
			radii,
			timer,
			now_ms: 0.0,
		}
	}

	pub fn radius(&self, idx: usize) -> f64 {
		self.radii
			.get(idx)
			.map_or(self.config.base_radius, |r| r.value(self.now_ms))
	}

	pub fn node_at(&self, x: f64, y: f64) -> Option<usize> {
		self.layout.node_at(x, y, |idx| self.radius(idx))
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
		let Some(idx) = self.node_at(x, y) else {
			return false;
		};
		self.layout.begin_drag(idx, x, y);
		true
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		self.layout.drag_to(x, y);
	}

	pub fn pointer_up(&mut self) {
		self.layout.end_drag();
	}

	/// Advance the pulse clock to `now_ms` and step the layout.
	pub fn tick(&mut self, dt: f32, now_ms: f64) -> bool {
		self.now_ms = now_ms;
		if self.timer.poll(now_ms) {
			self.pulse(now_ms);
		}
		self.layout.tick(dt)
	}

	fn pulse(&mut self, now_ms: f64) {
		let (base, amplitude, duration) = (
			self.config.base_radius,
			self.config.pulse_amplitude,
			self.config.pulse_duration_ms,
		);
		for ((_, node, _), radius) in self.layout.iter().zip(self.radii.iter_mut()) {
			radius.retarget(pulse_target(base, amplitude, now_ms, node.id), now_ms, duration);
		}
	}
}

impl Reheat for BotnetState {
	fn reheat(&mut self, alpha: f64) {
		self.layout.reheat(alpha);
	}
}

/// A simulated bot; `group` picks its color.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BotNode {
	pub id: usize,
	pub group: usize,
}

/// Generated nodes and chain links (`source` → `target` by node id).
#[derive(Clone, Debug, Default)]
pub struct BotnetData {
	pub nodes: Vec<BotNode>,
	pub links: Vec<(usize, usize)>,
}

#[derive(Clone, Debug)]
pub struct BotnetConfig {
	pub node_count: usize,
	pub groups: usize,
	/// Chance that each consecutive pair gets a link.
	pub link_probability: f64,
	pub height: f64,
	pub link_distance: f64,
	pub collide_radius: f64,
	pub charge: f32,
	pub base_radius: f64,
	pub pulse_amplitude: f64,
	pub pulse_interval_ms: f64,
	pub pulse_duration_ms: f64,
}

impl Default for BotnetConfig {
	fn default() -> Self {
		Self {
			node_count: 20,
			groups: 3,
			link_probability: 0.7,
			height: 400.0,
			link_distance: 50.0,
			collide_radius: 15.0,
			charge: 100.0,
			base_radius: 12.0,
			pulse_amplitude: 5.0,
			pulse_interval_ms: 2000.0,
			pulse_duration_ms: 1000.0,
		}
	}
}

/// One synthetic threat marker.
#[derive(Clone, Debug, Default)]
pub struct ThreatPoint {
	pub id: String,
	pub color: String,
}

#[derive(Clone, Debug)]
pub struct ThreatMapConfig {
	pub count: usize,
	pub height: f64,
	pub radius: f64,
	pub collide_radius: f64,
	pub charge: f32,
}

impl Default for ThreatMapConfig {
	fn default() -> Self {
		Self {
			count: 50,
			height: 400.0,
			radius: 8.0,
			collide_radius: 10.0,
			charge: 30.0,
		}
	}
}

use std::collections::HashMap;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::energy::{ALPHA_ACTIVE, Energy};

/// Tunables for one layout.
#[derive(Clone, Debug)]
pub struct LayoutParams {
	/// Pairwise repulsion handed to `force_graph`.
	pub charge: f32,
	/// Edge spring stiffness handed to `force_graph`.
	pub spring: f32,
	/// Rest length links are pulled toward.
	pub link_distance: f64,
	/// Radius each node keeps clear of its neighbours.
	pub collide_radius: f64,
}

impl Default for LayoutParams {
	fn default() -> Self {
		Self {
			charge: 150.0,
			spring: 0.05,
			link_distance: 30.0,
			collide_radius: 10.0,
		}
	}
}

/// A `force_graph` simulation with energy decay, centering, collision,
/// link rest length and pinning layered on top.
///
/// Nodes are addressed by their insertion index. Positions are cached in
/// `positions` and written back to the graph around each physics step.
pub struct ForceLayout<N> {
	graph: ForceGraph<usize, ()>,
	handles: Vec<DefaultNodeIdx>,
	nodes: Vec<N>,
	positions: Vec<(f64, f64)>,
	links: Vec<(usize, usize)>,
	degree: Vec<usize>,
	pins: HashMap<usize, (f64, f64)>,
	dragging: Option<usize>,
	params: LayoutParams,
	center: (f64, f64),
	pub energy: Energy,
}

impl<N> ForceLayout<N> {
	pub fn new(params: LayoutParams, width: f64, height: f64) -> Self {
		let graph = ForceGraph::new(SimulationParameters {
			force_charge: params.charge,
			force_spring: params.spring,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		Self {
			graph,
			handles: Vec::new(),
			nodes: Vec::new(),
			positions: Vec::new(),
			links: Vec::new(),
			degree: Vec::new(),
			pins: HashMap::new(),
			dragging: None,
			params,
			center: (width / 2.0, height / 2.0),
			energy: Energy::default(),
		}
	}

	pub fn add_node(&mut self, x: f64, y: f64, data: N) -> usize {
		let id = self.nodes.len();
		let handle = self.graph.add_node(NodeData {
			x: x as f32,
			y: y as f32,
			mass: 10.0,
			is_anchor: false,
			user_data: id,
		});
		self.handles.push(handle);
		self.nodes.push(data);
		self.positions.push((x, y));
		self.degree.push(0);
		id
	}

	/// Connect two existing nodes. Returns `false` if either id is unknown.
	pub fn add_link(&mut self, source: usize, target: usize) -> bool {
		let (Some(&src), Some(&tgt)) = (self.handles.get(source), self.handles.get(target)) else {
			return false;
		};
		self.graph.add_edge(src, tgt, EdgeData::default());
		self.links.push((source, target));
		self.degree[source] += 1;
		self.degree[target] += 1;
		true
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn node(&self, id: usize) -> Option<&N> {
		self.nodes.get(id)
	}

	pub fn links(&self) -> &[(usize, usize)] {
		&self.links
	}

	/// Current position, or the pin while the node is held.
	pub fn position(&self, id: usize) -> Option<(f64, f64)> {
		self.pins
			.get(&id)
			.copied()
			.or_else(|| self.positions.get(id).copied())
	}

	pub fn iter(&self) -> impl Iterator<Item = (usize, &N, (f64, f64))> + '_ {
		self.nodes.iter().enumerate().map(|(id, node)| {
			let pos = self.pins.get(&id).copied().unwrap_or(self.positions[id]);
			(id, node, pos)
		})
	}

	/// Topmost node whose circle contains `(x, y)`; later nodes draw on top.
	pub fn node_at(&self, x: f64, y: f64, radius: impl Fn(usize) -> f64) -> Option<usize> {
		(0..self.nodes.len()).rev().find(|&id| {
			self.position(id).is_some_and(|(nx, ny)| {
				let (dx, dy) = (nx - x, ny - y);
				(dx * dx + dy * dy).sqrt() <= radius(id)
			})
		})
	}

	pub fn is_pinned(&self, id: usize) -> bool {
		self.pins.contains_key(&id)
	}

	/// Pin `id` under the pointer and keep the layout warm while it is held.
	pub fn begin_drag(&mut self, id: usize, x: f64, y: f64) {
		if id >= self.nodes.len() {
			return;
		}
		if let Some(prev) = self.dragging.replace(id) {
			self.pins.remove(&prev);
		}
		self.pins.insert(id, (x, y));
		self.energy.set_target(ALPHA_ACTIVE);
		self.energy.restart();
	}

	/// Move the held node. Returns `false` when nothing is being dragged.
	pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
		let Some(id) = self.dragging else {
			return false;
		};
		self.pins.insert(id, (x, y));
		true
	}

	pub fn end_drag(&mut self) {
		if let Some(id) = self.dragging.take() {
			if let Some(pin) = self.pins.remove(&id) {
				self.positions[id] = pin;
			}
			self.energy.set_target(0.0);
		}
	}

	pub fn reheat(&mut self, alpha: f64) {
		self.energy.reheat(alpha);
	}

	/// Run one step. Returns `false` once the layout has settled.
	pub fn tick(&mut self, dt: f32) -> bool {
		let Some(alpha) = self.energy.step() else {
			return false;
		};

		self.apply_links(alpha);
		self.apply_collisions();
		self.apply_center();
		self.apply_pins();
		self.write_back();

		self.graph.update(dt * alpha as f32);

		let positions = &mut self.positions;
		self.graph.visit_nodes(|node| {
			let (x, y) = (node.x() as f64, node.y() as f64);
			// Positions must stay finite; drop a step that isn't.
			if x.is_finite() && y.is_finite() {
				positions[node.data.user_data] = (x, y);
			}
		});
		self.apply_pins();
		true
	}

	fn apply_links(&mut self, alpha: f64) {
		let distance = self.params.link_distance;
		for &(s, t) in &self.links {
			let ((sx, sy), (tx, ty)) = (self.positions[s], self.positions[t]);
			let (mut dx, mut dy) = (tx - sx, ty - sy);
			let mut len = (dx * dx + dy * dy).sqrt();
			if len < 1e-6 {
				(dx, dy, len) = (1e-3, 0.0, 1e-3);
			}
			let (ds, dt) = (self.degree[s] as f64, self.degree[t] as f64);
			let strength = 1.0 / ds.min(dt);
			let bias = ds / (ds + dt);
			let k = (len - distance) / len * alpha * strength;
			let (dx, dy) = (dx * k, dy * k);
			self.positions[t].0 -= dx * bias;
			self.positions[t].1 -= dy * bias;
			self.positions[s].0 += dx * (1.0 - bias);
			self.positions[s].1 += dy * (1.0 - bias);
		}
	}

	fn apply_collisions(&mut self) {
		let min_dist = self.params.collide_radius * 2.0;
		let n = self.positions.len();
		for i in 0..n {
			for j in (i + 1)..n {
				let ((xi, yi), (xj, yj)) = (self.positions[i], self.positions[j]);
				let (mut dx, mut dy) = (xj - xi, yj - yi);
				let mut dist = (dx * dx + dy * dy).sqrt();
				if dist >= min_dist {
					continue;
				}
				if dist < 1e-6 {
					(dx, dy, dist) = (1e-3, 0.0, 1e-3);
				}
				let push = (min_dist - dist) / dist * 0.5;
				let (px, py) = (dx * push, dy * push);
				self.positions[i].0 -= px;
				self.positions[i].1 -= py;
				self.positions[j].0 += px;
				self.positions[j].1 += py;
			}
		}
	}

	fn apply_center(&mut self) {
		if self.is_empty() {
			return;
		}
		let n = self.positions.len() as f64;
		let (sx, sy) = self
			.positions
			.iter()
			.fold((0.0, 0.0), |(ax, ay), &(x, y)| (ax + x, ay + y));
		let (shift_x, shift_y) = (self.center.0 - sx / n, self.center.1 - sy / n);
		for pos in &mut self.positions {
			pos.0 += shift_x;
			pos.1 += shift_y;
		}
	}

	fn apply_pins(&mut self) {
		for (&id, &pin) in &self.pins {
			self.positions[id] = pin;
		}
	}

	fn write_back(&mut self) {
		let (positions, pins) = (&self.positions, &self.pins);
		self.graph.visit_nodes_mut(|node| {
			let id = node.data.user_data;
			let (x, y) = positions[id];
			node.data.x = x as f32;
			node.data.y = y as f32;
			node.data.is_anchor = pins.contains_key(&id);
		});
	}
}

#[cfg(test)]
mod tests {
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	use super::*;

	fn scattered(count: usize, seed: u64) -> ForceLayout<()> {
		let mut rng = StdRng::seed_from_u64(seed);
		let mut layout = ForceLayout::new(LayoutParams::default(), 600.0, 400.0);
		for _ in 0..count {
			layout.add_node(rng.gen_range(0.0..600.0), rng.gen_range(0.0..400.0), ());
		}
		layout
	}

	#[test]
	fn rejects_links_to_missing_nodes() {
		let mut layout = scattered(3, 1);
		assert!(layout.add_link(0, 1));
		assert!(!layout.add_link(1, 7));
		assert_eq!(layout.links(), &[(0, 1)]);
	}

	#[test]
	fn settles_and_stays_finite() {
		let mut layout = scattered(30, 2);
		let mut ticks = 0;
		while layout.tick(0.016) {
			ticks += 1;
			assert!(ticks < 1000, "layout never settled");
		}
		for (_, _, (x, y)) in layout.iter() {
			assert!(x.is_finite() && y.is_finite());
		}
		assert!(!layout.tick(0.016));
	}

	#[test]
	fn pinned_node_follows_pointer_exactly() {
		let mut layout = scattered(12, 3);
		layout.begin_drag(4, 123.456, 78.9);
		for _ in 0..40 {
			assert!(layout.tick(0.016));
			assert_eq!(layout.position(4), Some((123.456, 78.9)));
		}
		assert!(layout.drag_to(10.25, 300.5));
		layout.tick(0.016);
		assert_eq!(layout.position(4), Some((10.25, 300.5)));
		assert!(layout.is_pinned(4));
	}

	#[test]
	fn released_node_moves_again() {
		let mut layout = scattered(12, 4);
		layout.begin_drag(0, 0.0, 0.0);
		for _ in 0..20 {
			layout.tick(0.016);
		}
		layout.end_drag();
		assert!(!layout.is_pinned(0));
		assert!(!layout.drag_to(5.0, 5.0));

		layout.tick(0.016);
		assert_ne!(layout.position(0), Some((0.0, 0.0)));
	}

	#[test]
	fn collision_separates_coincident_nodes() {
		let mut layout = ForceLayout::new(LayoutParams::default(), 200.0, 200.0);
		layout.add_node(100.0, 100.0, ());
		layout.add_node(100.0, 100.0, ());
		layout.tick(0.016);

		let (a, b) = (layout.position(0).unwrap(), layout.position(1).unwrap());
		let dist = ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt();
		assert!(dist.is_finite() && dist > 1.0);
	}

	#[test]
	fn reheat_restarts_a_settled_layout() {
		let mut layout = scattered(5, 5);
		while layout.tick(0.016) {}
		layout.reheat(ALPHA_ACTIVE);
		assert!(layout.tick(0.016));
	}

	#[test]
	fn hit_test_prefers_topmost_node() {
		let mut layout = ForceLayout::new(LayoutParams::default(), 200.0, 200.0);
		assert!(layout.is_empty());
		assert_eq!(layout.node_at(50.0, 50.0, |_| 8.0), None);

		layout.add_node(50.0, 50.0, ());
		layout.add_node(54.0, 50.0, ());
		assert_eq!(layout.node_at(52.0, 50.0, |_| 8.0), Some(1));
		assert_eq!(layout.node_at(150.0, 150.0, |_| 8.0), None);
	}
}

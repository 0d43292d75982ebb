use super::curve::{Bezier, catmull_rom};
use super::scale::LinearScale;

pub const SAMPLE_COUNT: usize = 20;
const BASELINE: f64 = 50.0;
const AMPLITUDE: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
	pub time: usize,
	pub value: f64,
}

/// The synthetic influence series for a confidence percentage.
///
/// Confidence is not clamped; values outside 0..=100 just stretch the wave.
pub fn influence_series(confidence: f64) -> Vec<Sample> {
	(0..SAMPLE_COUNT)
		.map(|i| Sample {
			time: i,
			value: BASELINE + ((i as f64) * 0.5).sin() * AMPLITUDE * (confidence / 100.0),
		})
		.collect()
}

#[derive(Clone, Debug)]
pub struct Margin {
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
	pub left: f64,
}

#[derive(Clone, Debug)]
pub struct ChartConfig {
	pub height: f64,
	pub margin: Margin,
	pub ticks: usize,
	pub marker_radius: f64,
	pub fade_ms: f64,
}

impl Default for ChartConfig {
	fn default() -> Self {
		Self {
			height: 300.0,
			margin: Margin {
				top: 20.0,
				right: 30.0,
				bottom: 50.0,
				left: 50.0,
			},
			ticks: 5,
			marker_radius: 5.0,
			fade_ms: 1000.0,
		}
	}
}

/// A laid-out chart: series, scales, curve and marker positions.
pub struct ChartState {
	pub config: ChartConfig,
	pub samples: Vec<Sample>,
	pub x: LinearScale,
	pub y: LinearScale,
	pub markers: Vec<(f64, f64)>,
	pub curve: Vec<Bezier>,
	pub width: f64,
	pub started_ms: Option<f64>,
}

impl ChartState {
	pub fn new(confidence: f64, config: ChartConfig, width: f64) -> Self {
		let samples = influence_series(confidence);
		let m = &config.margin;
		let x = LinearScale::new(
			(0.0, (samples.len().max(2) - 1) as f64),
			(m.left, width - m.right),
		);
		let y = LinearScale::new((0.0, 100.0), (config.height - m.bottom, m.top));
		let markers: Vec<(f64, f64)> = samples
			.iter()
			.map(|s| (x.apply(s.time as f64), y.apply(s.value)))
			.collect();
		let curve = catmull_rom(&markers, 0.5);
		log::debug!("influence chart: confidence {confidence}");
		Self {
			config,
			samples,
			x,
			y,
			markers,
			curve,
			width,
			started_ms: None,
		}
	}

	/// Line opacity at `now_ms`; the first call starts the fade.
	pub fn fade(&mut self, now_ms: f64) -> f64 {
		let start = *self.started_ms.get_or_insert(now_ms);
		if self.config.fade_ms <= 0.0 {
			return 1.0;
		}
		((now_ms - start) / self.config.fade_ms).clamp(0.0, 1.0)
	}

	pub fn marker_at(&self, px: f64, py: f64) -> Option<usize> {
		let r = self.config.marker_radius;
		self.markers
			.iter()
			.rposition(|&(mx, my)| (mx - px).powi(2) + (my - py).powi(2) <= r * r)
	}

	pub fn tooltip_lines(&self, idx: usize) -> Option<[String; 2]> {
		let sample = self.samples.get(idx)?;
		Some([
			format!("Time: {}", sample.time),
			format!("Credibility: {:.2}%", sample.value),
		])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn series_has_fixed_length_and_formula() {
		for confidence in [0.0, 37.5, 75.0, 100.0, 250.0, -40.0] {
			let series = influence_series(confidence);
			assert_eq!(series.len(), 20);
			for (i, s) in series.iter().enumerate() {
				assert_eq!(s.time, i);
				let expected = 50.0 + ((i as f64) * 0.5).sin() * 20.0 * (confidence / 100.0);
				assert_eq!(s.value, expected);
			}
		}
	}

	#[test]
	fn same_confidence_same_series() {
		assert_eq!(influence_series(63.0), influence_series(63.0));
		assert_ne!(influence_series(63.0), influence_series(64.0));
	}

	#[test]
	fn zero_confidence_is_flat() {
		assert!(influence_series(0.0).iter().all(|s| s.value == 50.0));
	}

	#[test]
	fn markers_sit_inside_the_plot_area() {
		let chart = ChartState::new(100.0, ChartConfig::default(), 800.0);
		assert_eq!(chart.markers.len(), 20);
		assert_eq!(chart.markers[0].0, 50.0);
		assert_eq!(chart.markers[19].0, 770.0);
		for &(_, y) in &chart.markers {
			assert!((20.0..=250.0).contains(&y));
		}
		assert_eq!(chart.curve.len(), 19);
		assert_eq!(chart.curve[18].end, chart.markers[19]);
	}

	#[test]
	fn hover_reports_time_and_value() {
		let chart = ChartState::new(80.0, ChartConfig::default(), 800.0);
		let (mx, my) = chart.markers[3];
		let idx = chart.marker_at(mx + 2.0, my - 2.0).unwrap();
		assert_eq!(idx, 3);
		let [time, value] = chart.tooltip_lines(idx).unwrap();
		assert_eq!(time, "Time: 3");
		assert_eq!(value, format!("Credibility: {:.2}%", chart.samples[3].value));
		assert_eq!(chart.marker_at(0.0, 0.0), None);
	}

	#[test]
	fn fade_runs_from_zero_to_one() {
		let mut chart = ChartState::new(50.0, ChartConfig::default(), 800.0);
		assert_eq!(chart.fade(10_000.0), 0.0);
		assert_eq!(chart.fade(10_500.0), 0.5);
		assert_eq!(chart.fade(12_000.0), 1.0);
	}
}

/// Maps a numeric domain linearly onto a pixel range.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
	pub domain: (f64, f64),
	pub range: (f64, f64),
}

impl LinearScale {
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		Self { domain, range }
	}

	pub fn apply(&self, v: f64) -> f64 {
		let (d0, d1) = self.domain;
		let (r0, r1) = self.range;
		if (d1 - d0).abs() < f64::EPSILON {
			return (r0 + r1) / 2.0;
		}
		r0 + (v - d0) / (d1 - d0) * (r1 - r0)
	}

	/// Roughly `count` round tick values covering the domain.
	pub fn ticks(&self, count: usize) -> Vec<f64> {
		let (lo, hi) = if self.domain.0 <= self.domain.1 {
			self.domain
		} else {
			(self.domain.1, self.domain.0)
		};
		let step = tick_step(lo, hi, count);
		if step <= 0.0 || !step.is_finite() {
			return vec![lo];
		}
		let (first, last) = ((lo / step).ceil() as i64, (hi / step).floor() as i64);
		(first..=last).map(|i| i as f64 * step).collect()
	}
}

/// Step of the form 1, 2 or 5 × 10^k closest to `(hi - lo) / count`.
pub fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
	if count == 0 || hi <= lo {
		return 0.0;
	}
	let rough = (hi - lo) / count as f64;
	let power = 10f64.powf(rough.log10().floor());
	let error = rough / power;
	let factor = if error >= 50f64.sqrt() {
		10.0
	} else if error >= 10f64.sqrt() {
		5.0
	} else if error >= 2f64.sqrt() {
		2.0
	} else {
		1.0
	};
	factor * power
}

/// Tick label without trailing zeros for whole numbers.
pub fn tick_label(v: f64, step: f64) -> String {
	if step >= 1.0 {
		format!("{:.0}", v)
	} else {
		let decimals = (-step.log10().floor()) as usize;
		format!("{:.*}", decimals, v)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn maps_domain_ends_onto_range_ends() {
		let y = LinearScale::new((0.0, 100.0), (250.0, 20.0));
		assert_eq!(y.apply(0.0), 250.0);
		assert_eq!(y.apply(100.0), 20.0);
		assert_eq!(y.apply(50.0), 135.0);
	}

	#[test]
	fn time_axis_ticks() {
		let x = LinearScale::new((0.0, 19.0), (50.0, 770.0));
		assert_eq!(x.ticks(5), vec![0.0, 5.0, 10.0, 15.0]);
	}

	#[test]
	fn value_axis_ticks() {
		let y = LinearScale::new((0.0, 100.0), (250.0, 20.0));
		assert_eq!(y.ticks(5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
	}

	#[test]
	fn fractional_steps_and_labels() {
		assert!((tick_step(0.0, 1.0, 5) - 0.2).abs() < 1e-12);
		assert_eq!(tick_label(0.4, 0.2), "0.4");
		assert_eq!(tick_label(15.0, 5.0), "15");
	}

	#[test]
	fn degenerate_domain_collapses_to_middle() {
		let s = LinearScale::new((3.0, 3.0), (0.0, 10.0));
		assert_eq!(s.apply(3.0), 5.0);
		assert_eq!(s.ticks(5), vec![3.0]);
	}
}

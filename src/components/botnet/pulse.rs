//! Timer-driven radius pulsing for botnet nodes.

/// Cubic ease-in-out on `[0, 1]`.
pub fn ease_cubic_in_out(t: f64) -> f64 {
	let t = t.clamp(0.0, 1.0);
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
	}
}

/// Radius a node pulses toward at wall-clock `now_ms`; offset by id so nodes stagger.
pub fn pulse_target(base: f64, amplitude: f64, now_ms: f64, id: usize) -> f64 {
	base + (now_ms / 1000.0 + id as f64).sin() * amplitude
}

/// Fires once per interval, the first time one full interval after the first poll.
#[derive(Clone, Debug)]
pub struct PulseTimer {
	interval_ms: f64,
	next_due: Option<f64>,
}

impl PulseTimer {
	pub fn new(interval_ms: f64) -> Self {
		Self {
			interval_ms,
			next_due: None,
		}
	}

	pub fn poll(&mut self, now_ms: f64) -> bool {
		let Some(due) = self.next_due else {
			self.next_due = Some(now_ms + self.interval_ms);
			return false;
		};
		if now_ms < due {
			return false;
		}
		// Missed intervals (e.g. a backgrounded tab) collapse into one firing.
		let mut next = due + self.interval_ms;
		while next <= now_ms {
			next += self.interval_ms;
		}
		self.next_due = Some(next);
		true
	}
}

/// A smooth transition of one value over a fixed duration.
#[derive(Clone, Debug)]
pub struct Transition {
	from: f64,
	to: f64,
	start_ms: f64,
	duration_ms: f64,
}

impl Transition {
	pub fn settled(value: f64) -> Self {
		Self {
			from: value,
			to: value,
			start_ms: 0.0,
			duration_ms: 0.0,
		}
	}

	pub fn value(&self, now_ms: f64) -> f64 {
		if self.duration_ms <= 0.0 {
			return self.to;
		}
		let t = (now_ms - self.start_ms) / self.duration_ms;
		self.from + (self.to - self.from) * ease_cubic_in_out(t)
	}

	/// Start heading to `to` from wherever the value is right now.
	pub fn retarget(&mut self, to: f64, now_ms: f64, duration_ms: f64) {
		self.from = self.value(now_ms);
		self.to = to;
		self.start_ms = now_ms;
		self.duration_ms = duration_ms;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn easing_is_anchored_and_symmetric() {
		assert_eq!(ease_cubic_in_out(0.0), 0.0);
		assert_eq!(ease_cubic_in_out(1.0), 1.0);
		assert!((ease_cubic_in_out(0.5) - 0.5).abs() < 1e-12);
		assert!((ease_cubic_in_out(0.25) + ease_cubic_in_out(0.75) - 1.0).abs() < 1e-12);
		assert_eq!(ease_cubic_in_out(3.0), 1.0);
	}

	#[test]
	fn timer_first_fires_after_one_interval() {
		let mut timer = PulseTimer::new(2000.0);
		assert!(!timer.poll(10_000.0));
		assert!(!timer.poll(11_999.0));
		assert!(timer.poll(12_000.0));
		assert!(!timer.poll(12_500.0));
		assert!(timer.poll(14_000.0));
	}

	#[test]
	fn timer_collapses_missed_intervals() {
		let mut timer = PulseTimer::new(2000.0);
		timer.poll(0.0);
		assert!(timer.poll(9_000.0));
		assert!(!timer.poll(9_500.0));
		assert!(timer.poll(10_000.0));
	}

	#[test]
	fn transition_reaches_target_after_duration() {
		let mut radius = Transition::settled(12.0);
		assert_eq!(radius.value(500.0), 12.0);

		radius.retarget(17.0, 1000.0, 1000.0);
		assert_eq!(radius.value(1000.0), 12.0);
		assert!((radius.value(1500.0) - 14.5).abs() < 1e-9);
		assert_eq!(radius.value(2000.0), 17.0);
		assert_eq!(radius.value(5000.0), 17.0);
	}

	#[test]
	fn retarget_midway_starts_from_current_value() {
		let mut radius = Transition::settled(10.0);
		radius.retarget(20.0, 0.0, 1000.0);
		let midway = radius.value(500.0);
		radius.retarget(8.0, 500.0, 1000.0);
		assert_eq!(radius.value(500.0), midway);
	}

	#[test]
	fn pulse_target_stays_within_amplitude() {
		for id in 0..20 {
			for step in 0..200 {
				let r = pulse_target(12.0, 5.0, step as f64 * 137.0, id);
				assert!((7.0..=17.0).contains(&r));
			}
		}
	}
}

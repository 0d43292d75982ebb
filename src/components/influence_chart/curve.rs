//! Catmull-Rom interpolation expressed as cubic Bézier segments.

/// One cubic segment starting where the previous one ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bezier {
	pub c1: (f64, f64),
	pub c2: (f64, f64),
	pub end: (f64, f64),
}

fn dist_pow(a: (f64, f64), b: (f64, f64), alpha: f64) -> (f64, f64) {
	let d2 = (b.0 - a.0).powi(2) + (b.1 - a.1).powi(2);
	(d2.powf(alpha / 2.0), d2.powf(alpha))
}

/// Segments of a Catmull-Rom spline through `points` with parameter `alpha`
/// (0.5 is centripetal). End tangents reuse the end points, so the curve
/// starts and finishes exactly on the data.
pub fn catmull_rom(points: &[(f64, f64)], alpha: f64) -> Vec<Bezier> {
	const EPS: f64 = 1e-12;
	if points.len() < 2 {
		return Vec::new();
	}

	(0..points.len() - 1)
		.map(|i| {
			let p1 = points[i];
			let p2 = points[i + 1];
			let p0 = if i == 0 { p1 } else { points[i - 1] };
			let p3 = points.get(i + 2).copied().unwrap_or(p2);

			let (l01_a, l01_2a) = dist_pow(p0, p1, alpha);
			let (l12_a, l12_2a) = dist_pow(p1, p2, alpha);
			let (l23_a, l23_2a) = dist_pow(p2, p3, alpha);

			let mut c1 = p1;
			if l01_a > EPS {
				let a = 2.0 * l01_2a + 3.0 * l01_a * l12_a + l12_2a;
				let n = 3.0 * l01_a * (l01_a + l12_a);
				c1 = (
					(p1.0 * a - p0.0 * l12_2a + p2.0 * l01_2a) / n,
					(p1.1 * a - p0.1 * l12_2a + p2.1 * l01_2a) / n,
				);
			}

			let mut c2 = p2;
			if l23_a > EPS {
				let b = 2.0 * l23_2a + 3.0 * l23_a * l12_a + l12_2a;
				let m = 3.0 * l23_a * (l23_a + l12_a);
				c2 = (
					(p2.0 * b + p1.0 * l23_2a - p3.0 * l12_2a) / m,
					(p2.1 * b + p1.1 * l23_2a - p3.1 * l12_2a) / m,
				);
			}

			Bezier { c1, c2, end: p2 }
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn passes_through_every_point() {
		let points = [(0.0, 0.0), (10.0, 5.0), (20.0, -3.0), (30.0, 8.0)];
		let curve = catmull_rom(&points, 0.5);
		assert_eq!(curve.len(), 3);
		for (seg, p) in curve.iter().zip(&points[1..]) {
			assert_eq!(seg.end, *p);
		}
	}

	#[test]
	fn end_tangents_collapse_onto_end_points() {
		let points = [(0.0, 0.0), (10.0, 5.0), (20.0, -3.0)];
		let curve = catmull_rom(&points, 0.5);
		assert_eq!(curve[0].c1, points[0]);
		assert_eq!(curve[1].c2, points[2]);
	}

	#[test]
	fn collinear_points_stay_on_the_line() {
		let points = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)];
		for seg in catmull_rom(&points, 0.5) {
			for (x, y) in [seg.c1, seg.c2] {
				assert!((x - y).abs() < 1e-9);
			}
		}
	}

	#[test]
	fn too_few_points_yield_nothing() {
		assert!(catmull_rom(&[], 0.5).is_empty());
		assert!(catmull_rom(&[(1.0, 1.0)], 0.5).is_empty());
	}
}

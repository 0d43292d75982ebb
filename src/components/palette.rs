//! Color schemes shared by the canvases.

/// Categorical palette used for node groups.
pub const CATEGORY10: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Stops of the sequential red ramp, light to dark.
const REDS: &[(u8, u8, u8)] = &[
	(0xff, 0xf5, 0xf0),
	(0xfe, 0xe0, 0xd2),
	(0xfc, 0xbb, 0xa1),
	(0xfc, 0x92, 0x72),
	(0xfb, 0x6a, 0x4a),
	(0xef, 0x3b, 0x2c),
	(0xcb, 0x18, 0x1d),
	(0xa5, 0x0f, 0x15),
	(0x67, 0x00, 0x0d),
];

pub fn category(group: usize) -> &'static str {
	CATEGORY10[group % CATEGORY10.len()]
}

/// Sample the red ramp at `t` in `[0, 1]` as an `rgb(...)` string.
pub fn interpolate_reds(t: f64) -> String {
	let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
	let scaled = t * (REDS.len() - 1) as f64;
	let i = (scaled.floor() as usize).min(REDS.len() - 2);
	let f = scaled - i as f64;
	let (a, b) = (REDS[i], REDS[i + 1]);
	let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * f).round() as u8;
	format!("rgb({}, {}, {})", lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

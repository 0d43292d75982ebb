/// The subset of a `DOMTokenList` the theme swap needs.
pub trait ClassList {
	type Error;

	fn has(&self, class: &str) -> bool;
	fn remove(&self, class: &str) -> Result<(), Self::Error>;
	fn add(&self, class: &str) -> Result<(), Self::Error>;
}

/// Replace whichever theme class is present with the next one in the cycle,
/// leaving unrelated classes alone. Returns the applied theme.
pub fn apply_next_theme<C: ClassList>(classes: &C) -> Result<Theme, C::Error> {
	let next = Theme::after(Theme::current(|c| classes.has(c)));
	for theme in Theme::ALL {
		classes.remove(theme.class_name())?;
	}
	classes.add(next.class_name())?;
	Ok(next)
}

/// Visual themes, applied as a class on the document body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
	DarkMode,
	Cyberpunk,
	Matrix,
	Hacker,
}

impl Theme {
	pub const ALL: [Theme; 4] = [Theme::DarkMode, Theme::Cyberpunk, Theme::Matrix, Theme::Hacker];

	pub fn class_name(self) -> &'static str {
		match self {
			Theme::DarkMode => "dark-mode",
			Theme::Cyberpunk => "cyberpunk",
			Theme::Matrix => "matrix",
			Theme::Hacker => "hacker",
		}
	}

	/// First theme whose class is present.
	pub fn current(has_class: impl Fn(&str) -> bool) -> Option<Self> {
		Self::ALL.into_iter().find(|t| has_class(t.class_name()))
	}

	/// The theme after `current`; no theme at all counts as "before the first".
	pub fn after(current: Option<Self>) -> Self {
		let next = current
			.and_then(|c| Self::ALL.iter().position(|&t| t == c))
			.map_or(0, |i| i + 1);
		Self::ALL[next % Self::ALL.len()]
	}
}

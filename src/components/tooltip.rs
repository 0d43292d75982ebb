use leptos::prelude::*;

/// Content and page position of the floating label.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
	pub left: f64,
	pub top: f64,
	pub lines: Vec<String>,
}

impl TooltipContent {
	pub fn at(x: f64, y: f64, lines: impl IntoIterator<Item = String>) -> Self {
		Self {
			left: x,
			top: y,
			lines: lines.into_iter().collect(),
		}
	}
}

/// A floating label that follows the pointer; hidden while `content` is `None`.
#[component]
pub fn Tooltip(#[prop(into)] content: Signal<Option<TooltipContent>>) -> impl IntoView {
	let style = move || match content.get() {
		Some(c) => format!(
			"position: fixed; left: {}px; top: {}px; display: block; pointer-events: none; \
			 background: rgba(0, 0, 0, 0.8); color: #fff; padding: 5px 10px; \
			 border-radius: 4px; font-size: 0.9em; z-index: 1000;",
			c.left, c.top
		),
		None => "display: none;".to_string(),
	};
	let lines = move || {
		content
			.get()
			.map(|c| c.lines)
			.unwrap_or_default()
			.into_iter()
			.map(|line| view! { <div>{line}</div> })
			.collect_view()
	};

	view! {
		<div class="tooltip" style=style>
			{lines}
		</div>
	}
}

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::DomTokenList;

use super::state::{ClassList, Theme, apply_next_theme};
use crate::components::force_layout::ALPHA_ACTIVE;
use crate::context::VizContext;

pub const CONTROL_ID: &str = "toggle-theme";

impl ClassList for DomTokenList {
	type Error = JsValue;

	fn has(&self, class: &str) -> bool {
		self.contains(class)
	}

	fn remove(&self, class: &str) -> Result<(), JsValue> {
		self.remove_1(class)
	}

	fn add(&self, class: &str) -> Result<(), JsValue> {
		self.add_1(class)
	}
}

/// Swap the body's theme class for the next one. Returns the applied theme.
fn cycle_body_theme() -> Result<Theme, JsValue> {
	let body = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
		.ok_or_else(|| JsValue::from_str("no document body"))?;
	apply_next_theme(&body.class_list())
}

/// Button that cycles the page theme and reheats running layouts.
#[component]
pub fn ThemeToggle(context: VizContext) -> impl IntoView {
	let on_click = move |_: web_sys::MouseEvent| match cycle_body_theme() {
		Ok(theme) => {
			let reheated = context.reheat_all(ALPHA_ACTIVE);
			log::info!("theme: {} ({reheated} layouts reheated)", theme.class_name());
		}
		Err(err) => log::warn!("theme toggle failed: {:?}", err),
	};

	view! {
		<button id=CONTROL_ID class="theme-toggle" on:click=on_click>
			"Toggle Theme"
		</button>
	}
}

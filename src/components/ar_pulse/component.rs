use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::PulseState;
use crate::components::canvas::{self, pointer_position};
use crate::components::frame_loop::FrameLoop;

pub const SURFACE_ID: &str = "ar-canvas";
const HEIGHT: f64 = 400.0;

/// A rotating diamond that breathes over time and reaches toward the pointer.
///
/// The frame loop is stopped when the component is unmounted.
#[component]
pub fn ArPulse() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<PulseState>>> = Rc::new(RefCell::new(None));

	let state_init = state.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some((ctx, w, h)) = canvas::prepare(&canvas, HEIGHT, "ar pulse") else {
			return;
		};
		*state_init.borrow_mut() = Some(PulseState::new(w, h));

		let state_anim = state_init.clone();
		let frames = FrameLoop::start(move |now_ms| {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				render::render(s, now_ms, &ctx);
				s.advance(now_ms);
			}
			true
		});
		on_cleanup(move || {
			frames.stop();
			log::debug!("ar pulse: stopped");
		});
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer_position(&canvas, &ev);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_moved(x, y);
		}
	};

	view! {
		<div class="viz-panel ar-pulse">
			<canvas
				id=SURFACE_ID
				node_ref=canvas_ref
				on:mousemove=on_mousemove
				style="display: block; width: 100%;"
			/>
		</div>
	}
}

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::{BotnetState, generate_botnet};
use super::types::BotnetConfig;
use crate::components::canvas::{self, pointer_position};
use crate::components::frame_loop::FrameLoop;
use crate::context::VizContext;

pub const SURFACE_ID: &str = "botnet-simulation-svg";

#[component]
pub fn BotnetGraph(
	context: VizContext,
	#[prop(optional)] config: BotnetConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<BotnetState>>> = Rc::new(RefCell::new(None));
	context.register(state.clone());

	let state_init = state.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some((ctx, w, _)) = canvas::prepare(&canvas, config.height, "botnet") else {
			return;
		};
		let data = generate_botnet(&mut rand::thread_rng(), &config);
		*state_init.borrow_mut() = Some(BotnetState::new(data, config.clone(), w));

		let state_anim = state_init.clone();
		let frames = FrameLoop::start(move |now_ms| {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016, now_ms);
				render::render(s, &ctx);
			}
			true
		});
		on_cleanup(move || frames.stop());
	});

	let canvas_point = move |ev: &MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		Some(pointer_position(&canvas, ev))
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(x, y);
		}
	};

	let state_mu = state.clone();
	let on_release = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pointer_up();
		}
	};

	view! {
		<div class="viz-panel botnet">
			<canvas
				id=SURFACE_ID
				node_ref=canvas_ref
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_release.clone()
				on:mouseleave=on_release
				style="display: block; width: 100%; cursor: grab;"
			/>
		</div>
	}
}

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::ThreatMapState;
use super::types::ThreatMapConfig;
use crate::components::canvas::{self, pointer_position};
use crate::components::frame_loop::FrameLoop;
use crate::components::tooltip::{Tooltip, TooltipContent};
use crate::context::VizContext;

pub const SURFACE_ID: &str = "threat-map-svg";

#[component]
pub fn ThreatMap(
	context: VizContext,
	#[prop(optional)] config: ThreatMapConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ThreatMapState>>> = Rc::new(RefCell::new(None));
	let tooltip = RwSignal::new(None::<TooltipContent>);
	context.register(state.clone());

	let state_init = state.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some((ctx, w, _)) = canvas::prepare(&canvas, config.height, "threat map") else {
			return;
		};
		*state_init.borrow_mut() = Some(ThreatMapState::new(
			&mut rand::thread_rng(),
			config.clone(),
			w,
		));

		let state_anim = state_init.clone();
		let frames = FrameLoop::start(move |_| {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
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
		let label = match *state_mm.borrow_mut() {
			Some(ref mut s) => s.pointer_move(x, y),
			None => None,
		};
		tooltip.set(label.map(|text| {
			TooltipContent::at(ev.client_x() as f64 + 10.0, ev.client_y() as f64 - 10.0, [text])
		}));
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pointer_up();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_leave();
		}
		tooltip.set(None);
	};

	view! {
		<div class="viz-panel threat-map">
			<canvas
				id=SURFACE_ID
				node_ref=canvas_ref
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				style="display: block; width: 100%; cursor: grab;"
			/>
			<Tooltip content=tooltip />
		</div>
	}
}

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::{ChartConfig, ChartState};
use crate::components::canvas::{self, pointer_position};
use crate::components::frame_loop::FrameLoop;
use crate::components::tooltip::{Tooltip, TooltipContent};

pub const SURFACE_ID: &str = "influence-chart";

/// Line chart of the synthetic influence series for `confidence` (0-100).
///
/// Changing `confidence` rebuilds the series and replays the fade-in.
#[component]
pub fn InfluenceChart(
	#[prop(into)] confidence: Signal<f64>,
	#[prop(optional)] config: ChartConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ChartState>>> = Rc::new(RefCell::new(None));
	let tooltip = RwSignal::new(None::<TooltipContent>);

	let state_init = state.clone();
	Effect::new(move |_| {
		let confidence = confidence.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some((ctx, w, _)) = canvas::prepare(&canvas, config.height, "influence chart") else {
			return;
		};
		*state_init.borrow_mut() = Some(ChartState::new(confidence, config.clone(), w));

		let state_anim = state_init.clone();
		let frames = FrameLoop::start(move |now_ms| {
			let mut guard = state_anim.borrow_mut();
			let Some(s) = guard.as_mut() else {
				return false;
			};
			let opacity = s.fade(now_ms);
			render::render(s, opacity, &ctx);
			opacity < 1.0
		});
		on_cleanup(move || frames.stop());
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer_position(&canvas, &ev);
		let lines = state_mm
			.borrow()
			.as_ref()
			.and_then(|s| s.marker_at(x, y).and_then(|idx| s.tooltip_lines(idx)));
		tooltip.set(lines.map(|lines| {
			TooltipContent::at(ev.client_x() as f64 + 15.0, ev.client_y() as f64 - 15.0, lines)
		}));
	};

	view! {
		<div class="viz-panel influence-chart">
			<canvas
				id=SURFACE_ID
				node_ref=canvas_ref
				on:mousemove=on_mousemove
				on:mouseleave=move |_| tooltip.set(None)
				style="display: block; width: 100%;"
			/>
			<Tooltip content=tooltip />
		</div>
	}
}

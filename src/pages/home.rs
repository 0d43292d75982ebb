use leptos::prelude::*;

use crate::components::{ArPulse, BotnetGraph, InfluenceChart, ThemeToggle, ThreatMap};
use crate::context::VizContext;

const DEFAULT_CONFIDENCE: f64 = 75.0;

/// Dashboard page with every visualization mounted once.
#[component]
pub fn Home() -> impl IntoView {
	let context = VizContext::default();
	let confidence = RwSignal::new(DEFAULT_CONFIDENCE);

	let on_confidence = move |ev: web_sys::Event| {
		if let Ok(value) = event_target_value(&ev).parse::<f64>() {
			confidence.set(value);
		}
	};

	view! {
		<div class="dashboard">
			<header class="dashboard-header">
				<h1>"Threat Intelligence"</h1>
				<ThemeToggle context=context.clone() />
			</header>

			<section>
				<h2>"Threat Map"</h2>
				<p class="subtitle">"Drag points to reposition. Hover for the threat id."</p>
				<ThreatMap context=context.clone() />
			</section>

			<section>
				<h2>"Botnet Evolution"</h2>
				<BotnetGraph context=context />
			</section>

			<section>
				<h2>"Influence Analytics"</h2>
				<label>
					"Confidence: " {move || format!("{:.0}%", confidence.get())}
					<input
						type="range"
						min="0"
						max="100"
						prop:value=move || confidence.get().to_string()
						on:input=on_confidence
					/>
				</label>
				<InfluenceChart confidence=confidence />
			</section>

			<section>
				<h2>"AR Pulse"</h2>
				<ArPulse />
			</section>
		</div>
	}
}

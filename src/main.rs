//! Browser entry point: mounts the dashboard.

use leptos::mount::mount_to_body;
use threat_viz_canvas::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}

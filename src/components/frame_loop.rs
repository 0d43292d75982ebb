use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::prelude::*;

/// Start/stop handle for a `requestAnimationFrame` loop.
///
/// Clones share the same flag, so a clone moved into `on_cleanup` can stop a
/// loop that is otherwise only owned by the browser's frame queue.
#[derive(Clone, Debug)]
pub struct FrameLoop {
	running: Arc<AtomicBool>,
}

impl FrameLoop {
	/// Call `frame` once per display frame with the wall clock in milliseconds.
	///
	/// The loop ends after `frame` returns `false` or [`FrameLoop::stop`] is called.
	pub fn start(mut frame: impl FnMut(f64) -> bool + 'static) -> Self {
		let handle = Self {
			running: Arc::new(AtomicBool::new(true)),
		};
		let running = handle.running.clone();
		let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let animate_inner = animate.clone();

		*animate.borrow_mut() = Some(Closure::new(move || {
			let keep_going = running.load(Ordering::Relaxed) && frame(js_sys::Date::now());
			if !keep_going {
				running.store(false, Ordering::Relaxed);
				// Breaks the self-reference; wasm-bindgen frees it after this call returns.
				drop(animate_inner.borrow_mut().take());
				return;
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				request_frame(cb);
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			request_frame(cb);
		}
		handle
	}

	pub fn stop(&self) {
		self.running.store(false, Ordering::Relaxed);
	}
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
	let Some(window) = web_sys::window() else {
		log::warn!("no window; animation loop not scheduled");
		return;
	};
	if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
		log::warn!("requestAnimationFrame failed: {:?}", err);
	}
}

//! Explicit application context shared by the visualizations.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A layout that can be nudged back into motion.
pub trait Reheat {
	fn reheat(&mut self, alpha: f64);
}

impl<T: Reheat> Reheat for Option<T> {
	fn reheat(&mut self, alpha: f64) {
		if let Some(inner) = self {
			inner.reheat(alpha);
		}
	}
}

/// Handles to the running layouts, so the theme toggle can reheat them.
///
/// Only weak references are kept; a layout whose view was torn down simply
/// drops out on the next [`VizContext::reheat_all`].
#[derive(Clone, Default)]
pub struct VizContext {
	layouts: Rc<RefCell<Vec<Weak<RefCell<dyn Reheat>>>>>,
}

impl VizContext {
	pub fn register(&self, layout: Rc<RefCell<dyn Reheat>>) {
		self.layouts.borrow_mut().push(Rc::downgrade(&layout));
	}

	/// Reheat every live layout. Returns how many were reached.
	pub fn reheat_all(&self, alpha: f64) -> usize {
		let mut layouts = self.layouts.borrow_mut();
		layouts.retain(|weak| weak.strong_count() > 0);
		for layout in layouts.iter().filter_map(Weak::upgrade) {
			// A layout mid-update is already moving.
			if let Ok(mut layout) = layout.try_borrow_mut() {
				layout.reheat(alpha);
			}
		}
		layouts.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Default)]
	struct Recorder(Vec<f64>);

	impl Reheat for Recorder {
		fn reheat(&mut self, alpha: f64) {
			self.0.push(alpha);
		}
	}

	#[test]
	fn reheats_live_layouts_and_forgets_dropped_ones() {
		let context = VizContext::default();
		let kept = Rc::new(RefCell::new(Some(Recorder::default())));
		let dropped = Rc::new(RefCell::new(Recorder::default()));
		context.register(kept.clone());
		context.register(dropped.clone());
		drop(dropped);

		assert_eq!(context.reheat_all(0.3), 1);
		assert_eq!(kept.borrow().as_ref().unwrap().0, vec![0.3]);
	}

	#[test]
	fn empty_slot_is_ignored() {
		let context = VizContext::default();
		let slot: Rc<RefCell<Option<Recorder>>> = Rc::new(RefCell::new(None));
		context.register(slot.clone());
		assert_eq!(context.reheat_all(0.3), 1);
		assert!(slot.borrow().is_none());
	}
}

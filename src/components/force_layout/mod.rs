//! Force-directed layout shared by the threat map and the botnet graph.

mod energy;
mod simulation;

pub use energy::ALPHA_ACTIVE;
pub use simulation::{ForceLayout, LayoutParams};

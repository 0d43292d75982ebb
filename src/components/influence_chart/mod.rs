mod component;
mod curve;
mod render;
mod scale;
mod state;

pub use component::InfluenceChart;

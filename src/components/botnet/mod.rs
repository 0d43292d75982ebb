mod component;
mod pulse;
mod render;
mod state;
mod types;

pub use component::BotnetGraph;

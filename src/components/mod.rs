mod ar_pulse;
mod botnet;
mod canvas;
mod force_layout;
mod frame_loop;
mod influence_chart;
mod palette;
mod theme;
mod threat_map;
mod tooltip;

pub use ar_pulse::ArPulse;
pub use botnet::BotnetGraph;
pub use influence_chart::InfluenceChart;
pub use theme::ThemeToggle;
pub use threat_map::ThreatMap;

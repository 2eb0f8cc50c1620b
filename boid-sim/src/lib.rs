pub mod render;
pub mod runner;
pub mod svg;

pub use render::{JsonLinesRenderer, Renderer, SummaryRenderer};
pub use runner::{run_headless, run_realtime, Clock, Simulation};

//! Charts module - Category colors and static bar chart rendering

pub mod palette;
mod renderer;

pub use renderer::{BarChartRenderer, RenderError};

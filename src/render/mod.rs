//! Chart composition and encoding.
//!
//! Charts are built as a format-neutral [`Canvas`] and then encoded to the
//! format named by the destination's extension.

mod canvas;
mod catalog;
mod charts;
mod element;
mod encode;
mod format;
mod renderer;
mod style;

pub use canvas::{Canvas, Shape, Text};
pub use catalog::{ChartKind, chart_path};
pub use charts::{ChartContext, build};
pub use element::{Axis, AxisOrientation, Element, Legend, LegendEntry, Marker};
pub use encode::{OutputFormat, to_svg};
pub use renderer::Renderer;
pub use style::{Color, Paint, TextAnchor};

mod draw;

pub mod builder;
pub mod format;
pub mod html;
pub mod palette;

pub use builder::{build, build_multi_series, build_single_series, build_top_n, ChartError};
pub use draw::{draw_chart, DrawnChart, PlotArea, RotatedLabel};
pub use format::format_value;
pub use html::{components, ChartComponents};

pub mod bar_renderer;

pub use bar_renderer::BarChartRenderer;

pub mod cost_chart_error;
pub mod image_format;

pub mod axis_label_service;
pub mod chart_layout_service;
pub mod chart_render_service;
pub mod cost_aggregate_service;

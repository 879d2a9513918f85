pub mod axis_label_service_impl;
pub mod chart_layout_service_impl;
pub mod chart_render_service_impl;
pub mod cost_aggregate_service_impl;

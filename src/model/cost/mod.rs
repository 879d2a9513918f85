pub mod cost_record;
pub mod report_window;
pub mod series_map;
pub mod service_ordering;

pub mod axis_label_sequence;
pub mod chart_model;
pub mod series_color;
pub mod table_palette;

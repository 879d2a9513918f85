use crate::common::*;

#[doc = r#"
    Drawing parameters of the stacked bar chart.

    Passed explicitly to the layout step; nothing here is process-wide state.

    * `font_family`, `font_size` - font of the title, axis texts and legend
    * `base_width` - conceptual frame width; the canvas is `base_width / 4 * 3` wide and 16:9
    * `legend_margin` - horizontal space subtracted from the canvas before dividing it into bars
    * `legend_x_offset`, `legend_y_offset` - legend offset from the top-left corner
    * `legend_scale_factor` - multiplier of one legend entry's height when reserving space
    * `legend_entry_height` - height of one entry in y-axis units, defaults to `font_size`
    * `palette` - optional `#rrggbb` list replacing the built-in color table
"#]
#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ChartConfig {
    pub font_family: String,
    pub font_size: f64,
    pub base_width: u32,
    pub legend_margin: f64,
    pub legend_x_offset: i32,
    pub legend_y_offset: i32,
    pub legend_scale_factor: f64,
    pub legend_entry_height: Option<f64>,
    pub gridline_dash: u32,
    pub palette: Option<Vec<String>>,
}

impl ChartConfig {
    pub fn entry_height(&self) -> f64 {
        self.legend_entry_height.unwrap_or(self.font_size)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            font_family: "monospace".to_string(),
            font_size: 12.0,
            base_width: 1280,
            legend_margin: 95.0,
            legend_x_offset: 10,
            legend_y_offset: -10,
            legend_scale_factor: 8.0,
            legend_entry_height: None,
            gridline_dash: 5,
            palette: None,
        }
    }
}

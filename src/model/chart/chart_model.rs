use crate::common::*;

use crate::enums::image_format::*;
use crate::model::chart::{axis_label_sequence::*, series_color::*};

#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct ChartFont {
    pub family: String,
    pub size: f64,
}

#[doc = r#"
    Legend placement and the vertical space reserved for it.

    * `x_offset`, `y_offset` - offset from the top-left corner of the plot area,
      `y_offset` counted upwards (negative moves the legend down)
    * `entry_height` - height of one legend entry in y-axis units
    * `reserved_height` - `entry_height * scale_factor * entry count`, added above the tallest bar
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct LegendGeometry {
    pub x_offset: i32,
    pub y_offset: i32,
    pub entry_height: f64,
    pub reserved_height: f64,
}

impl LegendGeometry {
    #[doc = "Top-left legend corner in plot-area pixels (y grows downwards)."]
    pub fn pixel_anchor(&self) -> (i32, i32) {
        (self.x_offset, -self.y_offset)
    }
}

#[doc = "One stacked layer: segment `i` spans `bases[i]..bases[i] + values[i]`."]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub bases: Vec<f64>,
    pub color: SeriesColor,
    pub line_width: u32,
}

impl BarSeries {
    pub fn tops(&self) -> impl Iterator<Item = f64> + '_ {
        self.bases.iter().zip(&self.values).map(|(base, value)| base + value)
    }
}

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct ChartModel {
    pub labels: ChartLabels,
    pub canvas: CanvasSize,
    pub bar_width: f64,
    pub series: Vec<BarSeries>,
    pub legend: LegendGeometry,
    pub axis_labels: AxisLabelSequence,
    pub y_max: f64,
    pub gridlines: Vec<f64>,
    pub gridline_dash: u32,
    pub font: ChartFont,
    pub image_format: ImageFormat,
}

impl ChartModel {
    pub fn x_axis_points_count(&self) -> usize {
        self.axis_labels.len().saturating_sub(1)
    }

    #[doc = "Stacked height of every x-axis point."]
    pub fn stacked_totals(&self) -> Vec<f64> {
        let mut totals: Vec<f64> = vec![0.0; self.x_axis_points_count()];

        for series in &self.series {
            for (total, value) in totals.iter_mut().zip(series.values()) {
                *total += value;
            }
        }

        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_anchor_turns_downward_offset_into_pixels() {
        let legend: LegendGeometry = LegendGeometry::new(10, -10, 12.0, 288.0);
        assert_eq!(legend.pixel_anchor(), (10, 10));

        let raised: LegendGeometry = LegendGeometry::new(4, 6, 12.0, 0.0);
        assert_eq!(raised.pixel_anchor(), (4, -6));
    }
}

use crate::enums::image_format::*;
use crate::model::{
    chart::{axis_label_sequence::*, chart_model::*},
    configs::chart_config::*,
    cost::{series_map::*, service_ordering::*},
};

pub trait ChartLayoutService {
    #[doc = "
        Builds the stacked bar chart model.
        # Arguments
        * `labels` - Chart title and axis texts
        * `ordering` - Stack order, bottom layer first
        * `series_map` - Daily values of every ordered service
        * `axis_labels` - Output of the axis label builder
        * `x_axis_points_count` - Number of bars per series
        * `image_format` - Target format, carried along in the model
        * `config` - Font, canvas and legend parameters
        # Errors
        * `EmptySeries` - `x_axis_points_count` is zero
        * `SeriesLengthMismatch` - a series is missing or has another length
    "]
    #[allow(clippy::too_many_arguments)]
    fn build_model(
        &self,
        labels: ChartLabels,
        ordering: &ServiceOrdering,
        series_map: &SeriesMap,
        axis_labels: AxisLabelSequence,
        x_axis_points_count: usize,
        image_format: ImageFormat,
        config: &ChartConfig,
    ) -> anyhow::Result<ChartModel>;
}

use crate::common::*;

use crate::model::chart::axis_label_sequence::*;

pub trait AxisLabelService {
    #[doc = "
        Sparse date labels for `x_axis_points_count + 1` ticks, oldest leftmost.
        Tick `i` days before `to` (seen in `tz`) is labeled when `i % 7 == 1`.
    "]
    fn build_labels<Tz: TimeZone>(
        &self,
        x_axis_points_count: usize,
        to: DateTime<Utc>,
        tz: &Tz,
    ) -> anyhow::Result<AxisLabelSequence>;
}

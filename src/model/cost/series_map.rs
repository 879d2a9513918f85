use crate::common::*;

#[doc = r#"
    Per-service daily costs aligned on one shared day axis.

    `series[service][i]` is the cost of `service` on `dates[i]`; every series
    has exactly `dates.len()` points.
"#]
#[derive(Debug, Clone, PartialEq, Default, Getters, new)]
#[getset(get = "pub")]
pub struct SeriesMap {
    dates: Vec<NaiveDate>,
    series: HashMap<String, Vec<f64>>,
}

impl SeriesMap {
    pub fn get(&self, service: &str) -> Option<&Vec<f64>> {
        self.series.get(service)
    }

    #[doc = "Number of x-axis points: the longest series."]
    pub fn x_axis_points_count(&self) -> usize {
        self.series.values().map(Vec::len).max().unwrap_or(0)
    }
}

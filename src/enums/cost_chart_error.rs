use thiserror::Error;

#[doc = r#"
    Failure kinds of the cost chart pipeline.

    Services create these at the point of failure and wrap them with
    `"[Type->operation]"` context on the way up, so callers can still tell
    bad input data (`InvalidCostValue`, `MixedCurrency`, ...) apart from
    render failures (`Encode`, `Write`) with `anyhow::Error::downcast_ref`.
"#]
#[derive(Debug, Error)]
pub enum CostChartError {
    #[error("invalid cost value {cost} for service '{service}'")]
    InvalidCostValue { service: String, cost: f64 },

    #[error("mixed currencies data source is not supported: {currencies:?}")]
    MixedCurrency { currencies: Vec<String> },

    #[error("no cost records to report")]
    EmptyRecords,

    #[error("x-axis points count must be at least 1")]
    EmptySeries,

    #[error("series '{service}' has {actual} points but the x-axis has {expected}")]
    SeriesLengthMismatch {
        service: String,
        expected: usize,
        actual: usize,
    },

    #[error("unsupported image format: '{0}'")]
    UnsupportedFormat(String),

    #[error("failed to encode chart: {0}")]
    Encode(String),

    #[error("failed to write chart to sink: {0}")]
    Write(#[source] std::io::Error),
}

impl CostChartError {
    #[doc = "True for failures caused by the input records rather than by rendering."]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CostChartError::InvalidCostValue { .. }
                | CostChartError::MixedCurrency { .. }
                | CostChartError::EmptyRecords
                | CostChartError::EmptySeries
                | CostChartError::SeriesLengthMismatch { .. }
        )
    }
}

#[doc = "Finds the pipeline failure kind inside a wrapped error chain."]
pub fn find_cost_chart_error(err: &anyhow::Error) -> Option<&CostChartError> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CostChartError>())
}

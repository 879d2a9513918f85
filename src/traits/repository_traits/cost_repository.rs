use crate::common::*;

use crate::model::cost::{cost_record::*, report_window::*};

#[async_trait]
pub trait CostRepository: Send + Sync {
    #[doc = "Total cost per (service, currency) over the window, descending by cost."]
    async fn sum_service_cost(
        &self,
        window: &ReportWindow,
        cost_threshold: f64,
    ) -> anyhow::Result<Vec<CostRecord>>;

    #[doc = "Cost per (service, day, currency) over the window, ascending by day."]
    async fn daily_service_cost(
        &self,
        window: &ReportWindow,
        cost_threshold: f64,
    ) -> anyhow::Result<Vec<CostRecord>>;
}

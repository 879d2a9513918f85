use crate::model::cost::{cost_record::*, series_map::*, service_ordering::*};

pub trait CostAggregateService {
    #[doc = "
        Orders distinct services by their summed cost, largest first.
        Services with equal totals keep their first-seen order.
        # Errors
        * `InvalidCostValue` - a cost is NaN, infinite or negative
    "]
    fn order_services_by_total_cost(&self, records: &[CostRecord])
        -> anyhow::Result<ServiceOrdering>;

    #[doc = "
        Builds one daily series per service of `ordering`, aligned on every
        calendar day from the first to the last record date. Days without a
        record are zero.
        # Errors
        * `InvalidCostValue` - a cost is NaN, infinite or negative
    "]
    fn group_daily_costs_by_service(
        &self,
        ordering: &ServiceOrdering,
        records: &[CostRecord],
    ) -> anyhow::Result<SeriesMap>;

    #[doc = "
        Returns the single currency shared by every record.
        # Errors
        * `MixedCurrency` - two or more distinct currencies
        * `EmptyRecords` - no record at all
    "]
    fn assert_single_currency(&self, records: &[CostRecord]) -> anyhow::Result<String>;
}

use crate::common::*;

use crate::enums::cost_chart_error::*;
use crate::model::cost::{cost_record::*, series_map::*, service_ordering::*};
use crate::traits::service_traits::cost_aggregate_service::*;

#[derive(Debug, Clone, Default, new)]
pub struct CostAggregateServiceImpl;

impl CostAggregateServiceImpl {
    #[doc = "Fails on the first record whose cost is NaN, infinite or negative."]
    fn validate_costs(&self, records: &[CostRecord]) -> Result<(), CostChartError> {
        match records.iter().find(|record| !record.has_valid_cost()) {
            Some(record) => Err(CostChartError::InvalidCostValue {
                service: record.service.clone(),
                cost: record.cost,
            }),
            None => Ok(()),
        }
    }
}

impl CostAggregateService for CostAggregateServiceImpl {
    fn order_services_by_total_cost(
        &self,
        records: &[CostRecord],
    ) -> anyhow::Result<ServiceOrdering> {
        self.validate_costs(records)
            .context("[CostAggregateServiceImpl->order_services_by_total_cost] rejected cost record")?;

        /* Totals in first-seen order; the stable sort below keeps it for ties */
        let mut totals: Vec<(String, f64)> = Vec::new();
        let mut position: HashMap<&str, usize> = HashMap::new();

        for record in records {
            match position.get(record.service.as_str()) {
                Some(&idx) => totals[idx].1 += record.cost,
                None => {
                    position.insert(record.service.as_str(), totals.len());
                    totals.push((record.service.clone(), record.cost));
                }
            }
        }

        totals.sort_by(|a, b| b.1.total_cmp(&a.1));

        let (services, totals): (Vec<String>, Vec<f64>) = totals.into_iter().unzip();

        Ok(ServiceOrdering::new(services, totals))
    }

    fn group_daily_costs_by_service(
        &self,
        ordering: &ServiceOrdering,
        records: &[CostRecord],
    ) -> anyhow::Result<SeriesMap> {
        self.validate_costs(records)
            .context("[CostAggregateServiceImpl->group_daily_costs_by_service] rejected cost record")?;

        /* Every calendar day from the first to the last record date, holes included */
        let first_day: Option<NaiveDate> = records.iter().map(|record| record.date).min();
        let last_day: Option<NaiveDate> = records.iter().map(|record| record.date).max();

        let dates: Vec<NaiveDate> = match (first_day, last_day) {
            (Some(first), Some(last)) => first.iter_days().take_while(|d| *d <= last).collect(),
            _ => Vec::new(),
        };

        let day_index: HashMap<NaiveDate, usize> = dates
            .iter()
            .enumerate()
            .map(|(idx, date)| (*date, idx))
            .collect();

        let mut series: HashMap<String, Vec<f64>> = ordering
            .iter()
            .map(|service| (service.clone(), vec![0.0; dates.len()]))
            .collect();

        for record in records {
            /* Services outside the ordering (e.g. under the totals threshold) are not charted */
            if let Some(values) = series.get_mut(&record.service) {
                values[day_index[&record.date]] += record.cost;
            }
        }

        Ok(SeriesMap::new(dates, series))
    }

    fn assert_single_currency(&self, records: &[CostRecord]) -> anyhow::Result<String> {
        let mut currencies: Vec<String> = Vec::new();

        for record in records {
            if !currencies.contains(&record.currency) {
                currencies.push(record.currency.clone());
            }
        }

        match currencies.len() {
            0 => Err(anyhow::Error::from(CostChartError::EmptyRecords)
                .context("[CostAggregateServiceImpl->assert_single_currency] nothing to report")),
            1 => Ok(currencies.remove(0)),
            _ => Err(anyhow::Error::from(CostChartError::MixedCurrency { currencies })
                .context("[CostAggregateServiceImpl->assert_single_currency] cannot chart mixed currencies")),
        }
    }
}

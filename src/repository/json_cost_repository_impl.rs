use crate::common::*;

use crate::dto::billing_row::*;
use crate::model::cost::{cost_record::*, report_window::*};
use crate::traits::repository_traits::cost_repository::*;
use crate::utils_modules::io_utils::*;

#[doc = "ROUND(SUM(cost * 100)) / 100"]
fn round_to_cents(cost: f64) -> f64 {
    (cost * 100.0).round() / 100.0
}

#[doc = r#"
    Cost data source backed by a billing export file (JSON array of `BillingRow`).

    Mirrors the warehouse queries: rows of `project_id` whose usage day (in the
    window's offset) lies within the window and whose line cost reaches the
    threshold are grouped and summed, then rounded to cents.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct JsonCostRepositoryImpl {
    records_path: PathBuf,
    project_id: String,
}

impl JsonCostRepositoryImpl {
    async fn load_rows(&self) -> anyhow::Result<Vec<BillingRow>> {
        let rows: Vec<BillingRow> = read_json_from_file(&self.records_path)
            .await
            .context("[JsonCostRepositoryImpl->load_rows] failed to read billing export")?;

        Ok(rows)
    }

    #[doc = "Rows of the configured project inside the window, with their usage day."]
    fn filter_rows<'a>(
        &self,
        rows: &'a [BillingRow],
        window: &ReportWindow,
        cost_threshold: f64,
    ) -> Vec<(&'a BillingRow, NaiveDate)> {
        rows.iter()
            .filter(|row| row.project_id == self.project_id)
            .filter(|row| row.cost >= cost_threshold)
            .map(|row| (row, row.usage_date(window.tz())))
            .filter(|(_, date)| window.contains(*date))
            .collect()
    }
}

#[async_trait]
impl CostRepository for JsonCostRepositoryImpl {
    async fn sum_service_cost(
        &self,
        window: &ReportWindow,
        cost_threshold: f64,
    ) -> anyhow::Result<Vec<CostRecord>> {
        let rows: Vec<BillingRow> = self
            .load_rows()
            .await
            .context("[JsonCostRepositoryImpl->sum_service_cost] query failed")?;

        /* GROUP BY service, currency - first-seen order */
        let mut groups: Vec<((String, String), f64)> = Vec::new();

        for (row, _) in self.filter_rows(&rows, window, cost_threshold) {
            let key: (String, String) = (row.service.clone(), row.currency.clone());

            match groups.iter_mut().find(|(group_key, _)| *group_key == key) {
                Some((_, sum)) => *sum += row.cost,
                None => groups.push((key, row.cost)),
            }
        }

        let mut records: Vec<CostRecord> = groups
            .into_iter()
            .map(|((service, currency), sum)| {
                CostRecord::new(service, *window.to(), round_to_cents(sum), currency)
            })
            .collect();

        /* ORDER BY cost DESC */
        records.sort_by(|a, b| b.cost.total_cmp(&a.cost));

        debug!("[JsonCostRepositoryImpl->sum_service_cost] {:?}", records);

        Ok(records)
    }

    async fn daily_service_cost(
        &self,
        window: &ReportWindow,
        cost_threshold: f64,
    ) -> anyhow::Result<Vec<CostRecord>> {
        let rows: Vec<BillingRow> = self
            .load_rows()
            .await
            .context("[JsonCostRepositoryImpl->daily_service_cost] query failed")?;

        /* GROUP BY day, service, currency - the BTreeMap key order is ORDER BY day, service */
        let mut groups: BTreeMap<(NaiveDate, String, String), f64> = BTreeMap::new();

        for (row, date) in self.filter_rows(&rows, window, cost_threshold) {
            *groups
                .entry((date, row.service.clone(), row.currency.clone()))
                .or_insert(0.0) += row.cost;
        }

        let records: Vec<CostRecord> = groups
            .into_iter()
            .map(|((date, service, currency), sum)| {
                CostRecord::new(service, date, round_to_cents(sum), currency)
            })
            .collect();

        Ok(records)
    }
}

use crate::common::*;

#[doc = r#"
    One cost row returned by the data source: a service's cost on one day
    (daily query) or over the whole window (totals query, `date` = window end).
"#]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct CostRecord {
    pub service: String,
    pub date: NaiveDate,
    pub cost: f64,
    pub currency: String,
}

impl CostRecord {
    #[doc = "Costs must be finite and non-negative."]
    pub fn has_valid_cost(&self) -> bool {
        self.cost.is_finite() && self.cost >= 0.0
    }
}

use crate::common::*;

use crate::utils_modules::time_utils::*;

#[doc = r#"
    One line item of the billing export.

    # Fields
    * `service` - billed service description (e.g. "Compute Engine")
    * `project_id` - project the usage belongs to
    * `usage_start_time` - usage start instant in UTC
    * `cost` - line item cost
    * `currency` - ISO currency code of `cost`
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct BillingRow {
    pub service: String,
    pub project_id: String,
    pub usage_start_time: DateTime<Utc>,
    pub cost: f64,
    pub currency: String,
}

impl BillingRow {
    #[doc = "Usage day of the row in the report's offset."]
    pub fn usage_date(&self, tz: &FixedOffset) -> NaiveDate {
        convert_local_date(self.usage_start_time, tz)
    }
}

use crate::common::*;

#[doc = r#"
    What to report on and where to put the image.

    `from` / `to` are calendar days in `utc_offset`; when absent, `to` is today
    and `from` is `period_days - 1` days before it.
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ReportConfig {
    pub records_path: String,
    pub project_id: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub period_days: u32,
    pub utc_offset: String,
    pub cost_threshold: f64,
    pub image_format: String,
    pub output_file_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            records_path: "./data/billing_export.json".to_string(),
            project_id: String::new(),
            from: None,
            to: None,
            period_days: 30,
            utc_offset: "+00:00".to_string(),
            cost_threshold: 0.01,
            image_format: "png".to_string(),
            output_file_name: "daily_service_cost".to_string(),
        }
    }
}

pub mod chart_config;
pub mod report_config;
pub mod system_config;
pub mod total_config;

/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : Renders the daily per-service cloud cost of a billing export as a stacked bar chart.

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod dto;
mod enums;
mod env_configuration;
mod model;
mod repository;
mod service;
mod traits;
mod utils_modules;

use enums::{cost_chart_error::*, image_format::*};
use model::{
    chart::table_palette::*,
    configs::{report_config::*, system_config::*, total_config::*},
    cost::report_window::*,
};
use repository::json_cost_repository_impl::*;
use service::{
    axis_label_service_impl::*, chart_layout_service_impl::*, chart_render_service_impl::*,
    cost_aggregate_service_impl::*,
};
use utils_modules::{logger_utils::*, time_utils::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();

    let system_config: &SystemConfig = get_system_config_info();
    set_global_logger(system_config.log_dir());

    info!("Service cost chart program start!");

    let report_config: &ReportConfig = get_report_config_info();

    let tz: FixedOffset = parse_utc_offset(report_config.utc_offset()).unwrap_or_else(|e| {
        error!("[main] {:?}", e);
        panic!("{:?}", e)
    });

    let window: ReportWindow = resolve_report_window(
        *report_config.from(),
        *report_config.to(),
        *report_config.period_days(),
        tz,
        Utc::now(),
    )
    .unwrap_or_else(|e| {
        error!("[main] {:?}", e);
        panic!("{:?}", e)
    });

    let image_format: ImageFormat = report_config
        .image_format()
        .parse::<ImageFormat>()
        .unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while reading image_format.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    let palette: TablePalette = match get_chart_config_info().palette() {
        Some(hex_list) => TablePalette::from_hex_list(hex_list).unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while reading the chart palette.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        }),
        None => TablePalette::default(),
    };

    /* 의존 주입 */
    let cost_repository: JsonCostRepositoryImpl = JsonCostRepositoryImpl::new(
        PathBuf::from(report_config.records_path()),
        report_config.project_id().to_string(),
    );

    let main_controller: MainController<
        JsonCostRepositoryImpl,
        CostAggregateServiceImpl,
        AxisLabelServiceImpl,
        ChartLayoutServiceImpl<TablePalette>,
        ChartRenderServiceImpl,
    > = MainController::new(
        cost_repository,
        CostAggregateServiceImpl::new(),
        AxisLabelServiceImpl::new(),
        ChartLayoutServiceImpl::new(palette),
        ChartRenderServiceImpl::new(),
    );

    let output_path: PathBuf = Path::new(system_config.output_dir()).join(format!(
        "{}_{}_{}.{}",
        report_config.output_file_name(),
        convert_date_to_str(*window.from()),
        convert_date_to_str(*window.to()),
        image_format.extension()
    ));

    main_controller
        .plot_daily_service_cost(
            &window,
            *report_config.cost_threshold(),
            image_format,
            &output_path,
            get_chart_config_info(),
        )
        .await
        .unwrap_or_else(|e| {
            let cause: &str = match find_cost_chart_error(&e) {
                Some(kind) if kind.is_input_error() => "bad input data",
                Some(_) => "render failure",
                None => "data source failure",
            };
            error!("[main] {}: {:?}", cause, e);
            panic!("[main] {}: {:?}", cause, e)
        });

    info!("Service cost chart program end!");
}

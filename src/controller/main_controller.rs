use crate::common::*;

use crate::enums::{cost_chart_error::*, image_format::*};
use crate::model::{
    chart::{axis_label_sequence::*, chart_model::*},
    configs::chart_config::*,
    cost::{cost_record::*, report_window::*, series_map::*, service_ordering::*},
};
use crate::traits::{
    repository_traits::cost_repository::*,
    service_traits::{
        axis_label_service::*, chart_layout_service::*, chart_render_service::*,
        cost_aggregate_service::*,
    },
};
use crate::utils_modules::time_utils::*;

#[derive(Debug, new)]
pub struct MainController<R, A, L, C, I>
where
    R: CostRepository,
    A: CostAggregateService,
    L: AxisLabelService,
    C: ChartLayoutService,
    I: ChartRenderService,
{
    cost_repository: R,
    cost_aggregate_service: A,
    axis_label_service: L,
    chart_layout_service: C,
    chart_render_service: I,
}

impl<R, A, L, C, I> MainController<R, A, L, C, I>
where
    R: CostRepository,
    A: CostAggregateService,
    L: AxisLabelService,
    C: ChartLayoutService,
    I: ChartRenderService + Clone + 'static,
{
    #[doc = r#"
        Builds the daily per-service cost chart of `window` and writes it to `output_path`.

        1. Total cost per service → service ordering (largest first)
        2. Daily cost per service → single currency check → aligned series
        3. Sparse date labels and the stacked bar chart model
        4. Rendering on a blocking worker into a buffered file

        Any failure aborts the whole chart; no partial image is produced
        unless the sink itself fails midway.

        # Arguments
        * `window` - Inclusive report days and their UTC offset
        * `cost_threshold` - Line items below this cost are ignored
        * `image_format` - Output image format
        * `output_path` - Destination file, parent directories are created
        * `chart_config` - Font, canvas and legend parameters
    "#]
    pub async fn plot_daily_service_cost(
        &self,
        window: &ReportWindow,
        cost_threshold: f64,
        image_format: ImageFormat,
        output_path: &Path,
        chart_config: &ChartConfig,
    ) -> anyhow::Result<()> {
        let model: ChartModel = self
            .build_daily_service_cost_model(window, cost_threshold, image_format, chart_config)
            .await?;

        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!(
                    "[MainController->plot_daily_service_cost] failed to create {:?}",
                    parent
                )
            })?;
        }

        let renderer: I = self.chart_render_service.clone();
        let output: PathBuf = output_path.to_path_buf();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                let file: std::fs::File =
                    std::fs::File::create(&output).map_err(CostChartError::Write)?;
                let mut sink: BufWriter<std::fs::File> = BufWriter::new(file);

                renderer.render(&model, image_format, &mut sink)
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[MainController->plot_daily_service_cost] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.context("[MainController->plot_daily_service_cost] render failed")?;

        info!("Daily service cost chart generated successfully: {:?}", output_path);

        Ok(())
    }

    #[doc = "Steps 1-3 of `plot_daily_service_cost`: everything up to the chart model."]
    pub async fn build_daily_service_cost_model(
        &self,
        window: &ReportWindow,
        cost_threshold: f64,
        image_format: ImageFormat,
        chart_config: &ChartConfig,
    ) -> anyhow::Result<ChartModel> {
        let sum_service_cost: Vec<CostRecord> = self
            .cost_repository
            .sum_service_cost(window, cost_threshold)
            .await
            .context("[MainController->build_daily_service_cost_model] sum_service_cost")?;

        let ordering: ServiceOrdering = self
            .cost_aggregate_service
            .order_services_by_total_cost(&sum_service_cost)
            .context("[MainController->build_daily_service_cost_model] order_services_by_total_cost")?;

        if ordering.is_empty() {
            return Err(anyhow::Error::from(CostChartError::EmptyRecords).context(format!(
                "[MainController->build_daily_service_cost_model] no service cost between {} and {}",
                window.from(),
                window.to()
            )));
        }

        let daily_service_cost: Vec<CostRecord> = self
            .cost_repository
            .daily_service_cost(window, cost_threshold)
            .await
            .context("[MainController->build_daily_service_cost_model] daily_service_cost")?;
        debug!("{:?}", daily_service_cost);

        let currency: String = self
            .cost_aggregate_service
            .assert_single_currency(&daily_service_cost)
            .with_context(|| {
                format!(
                    "[MainController->build_daily_service_cost_model] {} ~ {}",
                    window.from(),
                    window.to()
                )
            })?;

        let series_map: SeriesMap = self
            .cost_aggregate_service
            .group_daily_costs_by_service(&ordering, &daily_service_cost)
            .context("[MainController->build_daily_service_cost_model] group_daily_costs_by_service")?;

        let x_axis_points_count: usize = series_map.x_axis_points_count();

        /* Labels count back from the exclusive end of the axis: bar i is day `to - (count - i)` */
        let last_day: NaiveDate = series_map.dates().last().copied().unwrap_or(*window.to());
        let axis_end: NaiveDate = last_day.checked_add_days(Days::new(1)).ok_or_else(|| {
            anyhow!(
                "[MainController->build_daily_service_cost_model] no day after {}",
                last_day
            )
        })?;
        let to_utc: DateTime<Utc> = start_of_day_utc(axis_end, window.tz())?;
        let axis_labels: AxisLabelSequence = self
            .axis_label_service
            .build_labels(x_axis_points_count, to_utc, window.tz())
            .context("[MainController->build_daily_service_cost_model] build_labels")?;

        let labels: ChartLabels = ChartLabels::new(
            format!(
                "Google Cloud Platform Cost (from {} to {})",
                convert_date_to_str(*window.from()),
                convert_date_to_str(*window.to())
            ),
            format!("Date ({})", window.tz()),
            currency,
        );

        let model: ChartModel = self
            .chart_layout_service
            .build_model(
                labels,
                &ordering,
                &series_map,
                axis_labels,
                x_axis_points_count,
                image_format,
                chart_config,
            )
            .context("[MainController->build_daily_service_cost_model] build_model")?;

        Ok(model)
    }
}

use crate::common::*;

use crate::enums::{cost_chart_error::*, image_format::*};
use crate::model::{
    chart::{axis_label_sequence::*, chart_model::*},
    configs::chart_config::*,
    cost::{series_map::*, service_ordering::*},
};
use crate::traits::service_traits::chart_layout_service::*;
use crate::utils_modules::traits::*;

const GRIDLINE_DIVISIONS: f64 = 5.0;

#[derive(Debug, Clone, new)]
pub struct ChartLayoutServiceImpl<P: ColorPalette> {
    palette: P,
}

impl<P: ColorPalette> ChartLayoutServiceImpl<P> {
    #[doc = "(1280 / 4) * 3 = 960 wide, 16:9 high"]
    fn canvas_size(&self, config: &ChartConfig) -> CanvasSize {
        let width: u32 = (config.base_width / 4) * 3;
        let height: u32 = (width / 16) * 9;
        CanvasSize::new(width, height)
    }

    #[doc = "Cumulative stacking: layer k starts where layer k-1 ends."]
    fn stack_series(
        &self,
        ordering: &ServiceOrdering,
        series_map: &SeriesMap,
        x_axis_points_count: usize,
    ) -> anyhow::Result<Vec<BarSeries>> {
        let mut running_top: Vec<f64> = vec![0.0; x_axis_points_count];
        let mut bar_series: Vec<BarSeries> = Vec::with_capacity(ordering.len());

        for (idx, service) in ordering.iter().enumerate() {
            let values: &Vec<f64> = match series_map.get(service) {
                Some(values) if values.len() == x_axis_points_count => values,
                other => {
                    return Err(anyhow::Error::from(CostChartError::SeriesLengthMismatch {
                        service: service.clone(),
                        expected: x_axis_points_count,
                        actual: other.map(Vec::len).unwrap_or(0),
                    })
                    .context("[ChartLayoutServiceImpl->stack_series] series does not fit the x-axis"));
                }
            };

            let bases: Vec<f64> = running_top.clone();

            for (top, value) in running_top.iter_mut().zip(values) {
                *top += value;
            }

            bar_series.push(BarSeries::new(
                service.clone(),
                values.clone(),
                bases,
                self.palette.color(idx),
                0,
            ));
        }

        Ok(bar_series)
    }

    #[doc = "Horizontal gridline positions at a 1/2/5 x 10^n step, strictly above zero."]
    fn gridline_values(&self, y_max: f64) -> Vec<f64> {
        if y_max <= 0.0 || !y_max.is_finite() {
            return Vec::new();
        }

        let raw_step: f64 = y_max / GRIDLINE_DIVISIONS;
        let magnitude: f64 = 10f64.powf(raw_step.log10().floor());
        let normalized: f64 = raw_step / magnitude;

        let nice: f64 = if normalized <= 1.0 {
            1.0
        } else if normalized <= 2.0 {
            2.0
        } else if normalized <= 5.0 {
            5.0
        } else {
            10.0
        };
        let step: f64 = nice * magnitude;

        (1..)
            .map(|k| k as f64 * step)
            .take_while(|value| *value <= y_max)
            .collect()
    }
}

impl<P: ColorPalette> ChartLayoutService for ChartLayoutServiceImpl<P> {
    fn build_model(
        &self,
        labels: ChartLabels,
        ordering: &ServiceOrdering,
        series_map: &SeriesMap,
        axis_labels: AxisLabelSequence,
        x_axis_points_count: usize,
        image_format: ImageFormat,
        config: &ChartConfig,
    ) -> anyhow::Result<ChartModel> {
        if x_axis_points_count == 0 {
            return Err(anyhow::Error::from(CostChartError::EmptySeries)
                .context("[ChartLayoutServiceImpl->build_model] cannot size bars for zero x-axis points"));
        }

        let canvas: CanvasSize = self.canvas_size(config);

        /* Canvas width minus the fixed margin, split evenly across the x-axis points */
        let bar_width: f64 =
            (f64::from(canvas.width) - config.legend_margin) / x_axis_points_count as f64;

        let series: Vec<BarSeries> = self
            .stack_series(ordering, series_map, x_axis_points_count)
            .context("[ChartLayoutServiceImpl->build_model] stacking failed")?;

        let data_max: f64 = series
            .last()
            .map(|top_layer| top_layer.tops().fold(0.0, f64::max))
            .unwrap_or(0.0);

        /* Keep the legend clear of the bars: reserve entry height * scale per legend entry */
        let entry_height: f64 = config.entry_height() * config.legend_scale_factor;
        let reserved_height: f64 = entry_height * series.len() as f64;
        debug!(
            "legend_height={}, legends_height={}",
            entry_height, reserved_height
        );

        let mut y_max: f64 = data_max + reserved_height;
        if y_max <= 0.0 {
            y_max = 1.0;
        }

        let legend: LegendGeometry = LegendGeometry::new(
            config.legend_x_offset,
            config.legend_y_offset,
            config.entry_height(),
            reserved_height,
        );

        let font: ChartFont = ChartFont::new(config.font_family.clone(), config.font_size);

        Ok(ChartModel::new(
            labels,
            canvas,
            bar_width,
            series,
            legend,
            axis_labels,
            y_max,
            self.gridline_values(y_max),
            config.gridline_dash,
            font,
            image_format,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::chart::{series_color::*, table_palette::*};

    fn ordering_of(names: &[&str]) -> ServiceOrdering {
        ServiceOrdering::new(
            names.iter().map(|n| n.to_string()).collect(),
            vec![0.0; names.len()],
        )
    }

    fn series_map_of(entries: &[(&str, Vec<f64>)]) -> SeriesMap {
        let points: usize = entries.first().map(|(_, v)| v.len()).unwrap_or(0);
        let dates: Vec<NaiveDate> = (0..points)
            .map(|i| NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap())
            .collect();

        SeriesMap::new(
            dates,
            entries
                .iter()
                .map(|(name, values)| (name.to_string(), values.clone()))
                .collect(),
        )
    }

    fn labels() -> ChartLabels {
        ChartLabels::new(
            "Cost".to_string(),
            "Date (+00:00)".to_string(),
            "USD".to_string(),
        )
    }

    fn axis(count: usize) -> AxisLabelSequence {
        AxisLabelSequence::new(vec![String::new(); count + 1])
    }

    fn scenario() -> (ServiceOrdering, SeriesMap) {
        (
            ordering_of(&["Compute", "Storage", "Network"]),
            series_map_of(&[
                ("Compute", vec![10.0, 10.0]),
                ("Storage", vec![5.0, 5.0]),
                ("Network", vec![2.0, 2.0]),
            ]),
        )
    }

    fn build(
        engine: &ChartLayoutServiceImpl<TablePalette>,
        ordering: &ServiceOrdering,
        series_map: &SeriesMap,
        count: usize,
        config: &ChartConfig,
    ) -> anyhow::Result<ChartModel> {
        engine.build_model(
            labels(),
            ordering,
            series_map,
            axis(count),
            count,
            ImageFormat::Png,
            config,
        )
    }

    #[test]
    fn scenario_stacks_to_seventeen() {
        let engine: ChartLayoutServiceImpl<TablePalette> =
            ChartLayoutServiceImpl::new(TablePalette::default());
        let (ordering, series_map) = scenario();

        let model: ChartModel =
            build(&engine, &ordering, &series_map, 2, &ChartConfig::default()).unwrap();

        let names: Vec<&str> = model.series().iter().map(|s| s.name().as_str()).collect();
        assert_eq!(names, vec!["Compute", "Storage", "Network"]);
        assert_eq!(model.stacked_totals(), vec![17.0, 17.0]);
        assert_eq!(model.series()[0].bases(), &vec![0.0, 0.0]);
        assert_eq!(model.series()[1].bases(), &vec![10.0, 10.0]);
        assert_eq!(model.series()[2].bases(), &vec![15.0, 15.0]);
        assert!(model.series().iter().all(|s| *s.line_width() == 0));
    }

    #[test]
    fn bases_are_cumulative_sums_of_lower_layers() {
        let engine: ChartLayoutServiceImpl<TablePalette> =
            ChartLayoutServiceImpl::new(TablePalette::default());
        let ordering: ServiceOrdering = ordering_of(&["A", "B", "C", "D"]);
        let series_map: SeriesMap = series_map_of(&[
            ("A", vec![3.5, 0.0, 1.25]),
            ("B", vec![0.0, 2.0, 4.0]),
            ("C", vec![1.0, 1.0, 0.5]),
            ("D", vec![0.25, 9.0, 0.0]),
        ]);

        let model: ChartModel =
            build(&engine, &ordering, &series_map, 3, &ChartConfig::default()).unwrap();

        for (k, layer) in model.series().iter().enumerate() {
            for point in 0..3 {
                let expected: f64 = model.series()[..k]
                    .iter()
                    .map(|lower| lower.values()[point])
                    .sum();
                assert!((layer.bases()[point] - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn canvas_and_bar_width_follow_fixed_frame() {
        let engine: ChartLayoutServiceImpl<TablePalette> =
            ChartLayoutServiceImpl::new(TablePalette::default());
        let (ordering, series_map) = scenario();

        let model: ChartModel =
            build(&engine, &ordering, &series_map, 2, &ChartConfig::default()).unwrap();

        assert_eq!(model.canvas(), &CanvasSize::new(960, 540));
        assert!((model.bar_width() - (960.0 - 95.0) / 2.0).abs() < 1e-9);
        assert_eq!(model.x_axis_points_count(), 2);
    }

    #[test]
    fn zero_points_is_empty_series_error() {
        let engine: ChartLayoutServiceImpl<TablePalette> =
            ChartLayoutServiceImpl::new(TablePalette::default());
        let (ordering, series_map) = scenario();

        let err: anyhow::Error =
            build(&engine, &ordering, &series_map, 0, &ChartConfig::default()).unwrap_err();
        assert!(matches!(
            find_cost_chart_error(&err),
            Some(CostChartError::EmptySeries)
        ));
    }

    #[test]
    fn series_length_must_match_point_count() {
        let engine: ChartLayoutServiceImpl<TablePalette> =
            ChartLayoutServiceImpl::new(TablePalette::default());
        let (ordering, series_map) = scenario();

        let err: anyhow::Error =
            build(&engine, &ordering, &series_map, 3, &ChartConfig::default()).unwrap_err();
        assert!(matches!(
            find_cost_chart_error(&err),
            Some(CostChartError::SeriesLengthMismatch { expected: 3, actual: 2, .. })
        ));

        let missing: ServiceOrdering = ordering_of(&["Compute", "Ghost"]);
        let err: anyhow::Error =
            build(&engine, &missing, &series_map, 2, &ChartConfig::default()).unwrap_err();
        assert!(matches!(
            find_cost_chart_error(&err),
            Some(CostChartError::SeriesLengthMismatch { service, actual: 0, .. }) if service == "Ghost"
        ));
    }

    #[test]
    fn colors_depend_only_on_position() {
        let engine: ChartLayoutServiceImpl<TablePalette> =
            ChartLayoutServiceImpl::new(TablePalette::default());
        let (forward, series_map) = scenario();
        let reversed: ServiceOrdering = ordering_of(&["Network", "Storage", "Compute"]);
        let config: ChartConfig = ChartConfig::default();

        let first: ChartModel = build(&engine, &forward, &series_map, 2, &config).unwrap();
        let again: ChartModel = build(&engine, &forward, &series_map, 2, &config).unwrap();
        let flipped: ChartModel = build(&engine, &reversed, &series_map, 2, &config).unwrap();

        let colors = |model: &ChartModel| -> Vec<SeriesColor> {
            model.series().iter().map(|s| *s.color()).collect()
        };

        assert_eq!(colors(&first), colors(&again));
        assert_eq!(colors(&first), colors(&flipped));
        assert_eq!(flipped.series()[0].name(), "Network");
        assert_eq!(*flipped.series()[0].color(), TablePalette::default().color(0));
    }

    #[test]
    fn palette_wraps_for_many_services() {
        let palette: TablePalette = TablePalette::from_hex_list(&[
            "#000001".to_string(),
            "#000002".to_string(),
        ])
        .unwrap();
        let engine: ChartLayoutServiceImpl<TablePalette> = ChartLayoutServiceImpl::new(palette);
        let ordering: ServiceOrdering = ordering_of(&["A", "B", "C"]);
        let series_map: SeriesMap =
            series_map_of(&[("A", vec![1.0]), ("B", vec![1.0]), ("C", vec![1.0])]);

        let model: ChartModel =
            build(&engine, &ordering, &series_map, 1, &ChartConfig::default()).unwrap();

        assert_eq!(*model.series()[0].color(), SeriesColor::new(0, 0, 1));
        assert_eq!(*model.series()[1].color(), SeriesColor::new(0, 0, 2));
        assert_eq!(*model.series()[2].color(), SeriesColor::new(0, 0, 1));
    }

    #[test]
    fn y_axis_reserves_legend_space_per_service() {
        let engine: ChartLayoutServiceImpl<TablePalette> =
            ChartLayoutServiceImpl::new(TablePalette::default());
        let (ordering, series_map) = scenario();
        let config: ChartConfig = ChartConfig {
            legend_entry_height: Some(2.0),
            ..ChartConfig::default()
        };

        let model: ChartModel = build(&engine, &ordering, &series_map, 2, &config).unwrap();

        /* 2.0 * 8 * 3 services above the tallest stack of 17 */
        assert!((model.legend().reserved_height() - 48.0).abs() < 1e-9);
        assert!((model.y_max() - 65.0).abs() < 1e-9);
        assert_eq!(model.legend().x_offset(), &10);
        assert_eq!(model.legend().y_offset(), &-10);
    }

    #[test]
    fn gridlines_are_regular_and_within_range() {
        let engine: ChartLayoutServiceImpl<TablePalette> =
            ChartLayoutServiceImpl::new(TablePalette::default());
        let (ordering, series_map) = scenario();
        let config: ChartConfig = ChartConfig {
            legend_entry_height: Some(2.0),
            ..ChartConfig::default()
        };

        let model: ChartModel = build(&engine, &ordering, &series_map, 2, &config).unwrap();

        /* y_max 65 → step 20 */
        assert_eq!(model.gridlines(), &vec![20.0, 40.0, 60.0]);
        assert_eq!(model.gridline_dash(), &5);
    }

    #[test]
    fn all_zero_costs_still_have_a_positive_axis() {
        let engine: ChartLayoutServiceImpl<TablePalette> =
            ChartLayoutServiceImpl::new(TablePalette::default());
        let ordering: ServiceOrdering = ordering_of(&[]);
        let series_map: SeriesMap = series_map_of(&[]);

        let model: ChartModel =
            build(&engine, &ordering, &series_map, 1, &ChartConfig::default()).unwrap();

        assert!(model.series().is_empty());
        assert_eq!(model.y_max(), &1.0);
    }

    #[test]
    fn font_comes_from_config() {
        let engine: ChartLayoutServiceImpl<TablePalette> =
            ChartLayoutServiceImpl::new(TablePalette::default());
        let (ordering, series_map) = scenario();
        let config: ChartConfig = ChartConfig {
            font_family: "Liberation Mono".to_string(),
            font_size: 14.0,
            ..ChartConfig::default()
        };

        let model: ChartModel = build(&engine, &ordering, &series_map, 2, &config).unwrap();
        assert_eq!(model.font(), &ChartFont::new("Liberation Mono".to_string(), 14.0));
    }
}

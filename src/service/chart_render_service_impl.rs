use crate::common::*;

use crate::enums::{cost_chart_error::*, image_format::*};
use crate::model::chart::{chart_model::*, series_color::*};
use crate::traits::service_traits::chart_render_service::*;

use image::{
    ExtendedColorType, ImageEncoder,
    codecs::{jpeg::JpegEncoder, png::PngEncoder},
};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const JPEG_QUALITY: u8 = 90;

fn encode_error<E: std::fmt::Debug>(err: E) -> anyhow::Error {
    anyhow::Error::from(CostChartError::Encode(format!("{:?}", err)))
}

fn to_rgb(color: &SeriesColor) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

#[derive(Debug, Clone, Default, new)]
pub struct ChartRenderServiceImpl;

impl ChartRenderServiceImpl {
    #[doc = "Draws the whole chart onto `root`. Backend independent."]
    fn draw_chart<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        model: &ChartModel,
    ) -> anyhow::Result<()> {
        let font_family: &str = model.font().family().as_str();
        let font_size: f64 = *model.font().size();
        let points: usize = model.x_axis_points_count();

        /* One tick per label: bars sit on 0..points, the last label tick on `points` */
        let x_min: f64 = -0.5;
        let x_max: f64 = points as f64 + 0.5;

        root.fill(&WHITE).map_err(encode_error)?;

        let mut chart = ChartBuilder::on(root)
            .caption(model.labels().title(), (font_family, font_size * 1.5))
            .margin(15)
            .x_label_area_size((font_size * 4.0) as i32)
            .y_label_area_size((font_size * 6.0) as i32)
            .build_cartesian_2d(x_min..x_max, 0f64..*model.y_max())
            .map_err(encode_error)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(0)
            .y_labels(model.gridlines().len() + 1)
            .x_desc(model.labels().x_label())
            .y_desc(model.labels().y_label())
            .label_style((font_family, font_size))
            .axis_desc_style((font_family, font_size))
            .y_label_formatter(&|y| format!("{:.0}", y))
            .draw()
            .map_err(encode_error)?;

        /* Bar width is given in pixels; convert it into x-axis units of the plot area */
        let (plot_width_px, _) = chart.plotting_area().dim_in_pixel();
        let px_per_point: f64 = f64::from(plot_width_px) / (x_max - x_min);
        let half_width: f64 = (model.bar_width() / px_per_point / 2.0).min(0.5);

        for series in model.series() {
            /* line_width 0 → filled rectangles without outline */
            let style: ShapeStyle = to_rgb(series.color()).filled();

            chart
                .draw_series(
                    series
                        .values()
                        .iter()
                        .zip(series.bases())
                        .enumerate()
                        .map(|(idx, (value, base))| {
                            let x: f64 = idx as f64;
                            Rectangle::new([(x - half_width, *base), (x + half_width, base + value)], style)
                        }),
                )
                .map_err(encode_error)?
                .label(series.name().as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], style));
        }

        let dash: i32 = *model.gridline_dash() as i32;

        for y in model.gridlines() {
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(x_min, *y), (x_max, *y)],
                    dash,
                    dash,
                    BLACK.stroke_width(1),
                ))
                .map_err(encode_error)?;
        }

        if !model.series().is_empty() {
            let (legend_x, legend_y) = model.legend().pixel_anchor();

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::Coordinate(legend_x, legend_y))
                .label_font((font_family, font_size))
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(encode_error)?;
        }

        /* Sparse date labels under their ticks */
        let label_style: TextStyle = TextStyle::from((font_family, font_size).into_font())
            .pos(Pos::new(HPos::Center, VPos::Top));

        for (position, label) in model.axis_labels().visible() {
            let (px, py) = chart.backend_coord(&(position as f64, 0.0));
            root.draw(&Text::new(label.to_string(), (px, py + 5), label_style.clone()))
                .map_err(encode_error)?;
        }

        Ok(())
    }

    fn render_svg(&self, model: &ChartModel) -> anyhow::Result<Vec<u8>> {
        let size: (u32, u32) = (*model.canvas().width(), *model.canvas().height());
        let mut svg: String = String::new();

        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            self.draw_chart(&root, model)?;
            root.present().map_err(encode_error)?;
        }

        Ok(svg.into_bytes())
    }

    fn render_bitmap(&self, model: &ChartModel, image_format: ImageFormat) -> anyhow::Result<Vec<u8>> {
        let (width, height) = (*model.canvas().width(), *model.canvas().height());
        let mut rgb: Vec<u8> = vec![0; width as usize * height as usize * 3];

        {
            let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
            self.draw_chart(&root, model)?;
            root.present().map_err(encode_error)?;
        }

        encode_rgb_buffer(&rgb, width, height, image_format)
    }
}

#[doc = "Encodes a packed RGB8 buffer as PNG or JPEG."]
pub fn encode_rgb_buffer(
    rgb: &[u8],
    width: u32,
    height: u32,
    image_format: ImageFormat,
) -> anyhow::Result<Vec<u8>> {
    let expected_len: usize = width as usize * height as usize * 3;
    if rgb.len() != expected_len {
        return Err(encode_error(format!(
            "RGB buffer holds {} bytes, {}x{} needs {}",
            rgb.len(),
            width,
            height,
            expected_len
        )));
    }

    let mut encoded: Vec<u8> = Vec::new();

    match image_format {
        ImageFormat::Png => PngEncoder::new(&mut encoded)
            .write_image(rgb, width, height, ExtendedColorType::Rgb8)
            .map_err(encode_error)?,
        ImageFormat::Jpg => JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY)
            .write_image(rgb, width, height, ExtendedColorType::Rgb8)
            .map_err(encode_error)?,
        ImageFormat::Svg => {
            return Err(encode_error("svg is not a raster format"));
        }
    }

    Ok(encoded)
}

#[doc = "Writes the encoded image to the sink; a failing sink keeps whatever it accepted."]
pub fn write_encoded<W: Write>(encoded: &[u8], sink: &mut W) -> anyhow::Result<()> {
    sink.write_all(encoded).map_err(CostChartError::Write)?;
    sink.flush().map_err(CostChartError::Write)?;
    Ok(())
}

impl ChartRenderService for ChartRenderServiceImpl {
    fn render<W: Write>(
        &self,
        model: &ChartModel,
        image_format: ImageFormat,
        sink: &mut W,
    ) -> anyhow::Result<()> {
        let rendered: anyhow::Result<Vec<u8>> = if image_format.is_raster() {
            self.render_bitmap(model, image_format)
        } else {
            self.render_svg(model)
        };

        let encoded: Vec<u8> = rendered.with_context(|| {
            format!("[ChartRenderServiceImpl->render] failed to encode {}", image_format)
        })?;

        write_encoded(&encoded, sink)
            .context("[ChartRenderServiceImpl->render] failed to write chart")?;

        info!(
            "Chart rendered: {} bytes of {} ({}x{})",
            encoded.len(),
            image_format,
            model.canvas().width(),
            model.canvas().height()
        );

        Ok(())
    }
}

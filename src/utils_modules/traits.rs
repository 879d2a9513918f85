use crate::model::chart::series_color::*;

/* Position → color lookup injected into the layout step */
pub trait ColorPalette {
    fn color(&self, index: usize) -> SeriesColor;
}

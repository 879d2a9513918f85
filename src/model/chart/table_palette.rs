use crate::common::*;

use crate::model::chart::series_color::*;
use crate::utils_modules::traits::*;

/* Tableau-like 20 color table; neighbouring entries stay distinguishable when stacked. */
const DEFAULT_TABLE: [(u8, u8, u8); 20] = [
    (31, 119, 180),
    (255, 127, 14),
    (44, 160, 44),
    (214, 39, 40),
    (148, 103, 189),
    (140, 86, 75),
    (227, 119, 194),
    (127, 127, 127),
    (188, 189, 34),
    (23, 190, 207),
    (174, 199, 232),
    (255, 187, 120),
    (152, 223, 138),
    (255, 152, 150),
    (197, 176, 213),
    (196, 156, 148),
    (247, 182, 210),
    (199, 199, 199),
    (219, 219, 141),
    (158, 218, 229),
];

#[doc = "Fixed lookup table palette: `color(i) = table[i mod table.len()]`."]
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct TablePalette {
    table: Vec<SeriesColor>,
}

impl TablePalette {
    pub fn from_colors(table: Vec<SeriesColor>) -> anyhow::Result<Self> {
        if table.is_empty() {
            return Err(anyhow!(
                "[TablePalette->from_colors] a palette needs at least one color"
            ));
        }

        Ok(TablePalette { table })
    }

    pub fn from_hex_list(hex_list: &[String]) -> anyhow::Result<Self> {
        let table: Vec<SeriesColor> = hex_list
            .iter()
            .map(|hex| SeriesColor::from_hex(hex))
            .collect::<anyhow::Result<Vec<SeriesColor>>>()
            .context("[TablePalette->from_hex_list] failed to parse palette")?;

        Self::from_colors(table)
    }
}

impl Default for TablePalette {
    fn default() -> Self {
        TablePalette {
            table: DEFAULT_TABLE
                .iter()
                .map(|&(r, g, b)| SeriesColor::new(r, g, b))
                .collect(),
        }
    }
}

impl ColorPalette for TablePalette {
    fn color(&self, index: usize) -> SeriesColor {
        self.table[index % self.table.len()]
    }
}

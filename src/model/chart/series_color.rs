use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SeriesColor {
    #[doc = "Parses `#rrggbb` (the leading `#` is optional)."]
    pub fn from_hex(hex: &str) -> anyhow::Result<Self> {
        let digits: &str = hex.trim().trim_start_matches('#');

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(anyhow!(
                "[SeriesColor->from_hex] '{}' is not a #rrggbb color",
                hex
            ));
        }

        let channel = |range: std::ops::Range<usize>| -> anyhow::Result<u8> {
            u8::from_str_radix(&digits[range], 16)
                .with_context(|| format!("[SeriesColor->from_hex] invalid hex digits in '{}'", hex))
        };

        Ok(SeriesColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

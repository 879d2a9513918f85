use crate::common::*;

use crate::enums::cost_chart_error::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpg,
    Svg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Svg => "svg",
        }
    }

    #[doc = "Raster formats are drawn into an RGB buffer first, vector formats straight into text."]
    pub fn is_raster(&self) -> bool {
        !matches!(self, ImageFormat::Svg)
    }
}

impl FromStr for ImageFormat {
    type Err = CostChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpg),
            "svg" => Ok(ImageFormat::Svg),
            other => Err(CostChartError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_identifiers() {
        assert_eq!("png".parse::<ImageFormat>().ok(), Some(ImageFormat::Png));
        assert_eq!("JPEG".parse::<ImageFormat>().ok(), Some(ImageFormat::Jpg));
        assert_eq!(" svg ".parse::<ImageFormat>().ok(), Some(ImageFormat::Svg));
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err: CostChartError = "gif".parse::<ImageFormat>().unwrap_err();
        assert!(matches!(err, CostChartError::UnsupportedFormat(ref f) if f == "gif"));
    }
}

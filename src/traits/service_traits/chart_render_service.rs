use crate::common::*;

use crate::enums::image_format::*;
use crate::model::chart::chart_model::*;

pub trait ChartRenderService: Send + Sync {
    #[doc = "
        Encodes `model` as `image_format` and writes every byte to `sink`.
        # Errors
        * `Encode` - drawing or image encoding failed
        * `Write` - the sink rejected a write; whatever was written stays there
    "]
    fn render<W: Write>(
        &self,
        model: &ChartModel,
        image_format: ImageFormat,
        sink: &mut W,
    ) -> anyhow::Result<()>;
}

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{
    BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError,
};
use crate::core::data::pixel_rect::PixelRect;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratePixelBufferError<MapFailure> {
    #[error("colour map error: {0}")]
    ColourMap(MapFailure),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(PixelBufferError),
}

/// Colours a row-major list of fractal values into a new pixel buffer.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>> {
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for value in input {
        let colour = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.extend_from_slice(&colour.to_rgba());
    }

    PixelBuffer::from_data(pixel_rect, buffer).map_err(GeneratePixelBufferError::PixelBuffer)
}

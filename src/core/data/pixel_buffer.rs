use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::collections::TryReserveError;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error(
        "pixel at x:{}, y:{} outside of PixelRect bounds top:{}, left:{}, bottom:{}, right:{}",
        .pixel.x,
        .pixel.y,
        .pixel_rect.top_left().y,
        .pixel_rect.top_left().x,
        .pixel_rect.bottom_right().y,
        .pixel_rect.bottom_right().x
    )]
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
    #[error("pixel rect size {pixel_rect_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
    #[error("pixel buffer of {width}x{height} RGBA pixels does not fit in memory")]
    TooLarge { width: u32, height: u32 },
    #[error("failed to allocate {bytes} bytes for pixel buffer: {source}")]
    Allocation {
        bytes: usize,
        #[source]
        source: TryReserveError,
    },
}

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> Option<usize> {
    usize::try_from(pixel_rect.size())
        .ok()?
        .checked_mul(BYTES_PER_PIXEL)
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA storage for every pixel of a [`PixelRect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Allocates a zeroed buffer, reporting allocation failure instead of
    /// aborting.
    pub fn try_new(pixel_rect: PixelRect) -> Result<Self, PixelBufferError> {
        let total_bytes =
            pixel_rect_to_buffer_size(pixel_rect).ok_or(PixelBufferError::TooLarge {
                width: pixel_rect.width(),
                height: pixel_rect.height(),
            })?;

        let mut buffer = PixelBufferData::new();
        buffer
            .try_reserve_exact(total_bytes)
            .map_err(|source| PixelBufferError::Allocation {
                bytes: total_bytes,
                source,
            })?;
        buffer.resize(total_bytes, 0);

        Ok(Self { pixel_rect, buffer })
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect).unwrap_or(usize::MAX);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.pixel_rect.width() as usize * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let index = self.index_of(pixel)?;
        let [r, g, b, a] = [
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
            self.buffer[index + 3],
        ];

        Some(Colour { r, g, b, a })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            })?;

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }

    pub fn colours(&self) -> impl Iterator<Item = Colour> + '_ {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|rgba| Colour {
                r: rgba[0],
                g: rgba[1],
                b: rgba[2],
                a: rgba[3],
            })
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if !self.pixel_rect.contains_point(pixel) {
            return None;
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        Some(relative_y * self.row_stride() + relative_x * BYTES_PER_PIXEL)
    }
}

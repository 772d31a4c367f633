use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::data::tile_size::TileSize;
use crate::core::util::calculate_tiles_in_pixel_rect::{calculate_tile_grid, tile_at};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratePixelBufferTiledError<AlgFailure, MapFailure> {
    #[error("fractal algorithm error: {0}")]
    Algorithm(AlgFailure),
    #[error("colour map error: {0}")]
    ColourMap(MapFailure),
    #[error("pixel rect error: {0}")]
    PixelRect(PixelRectError),
}

type TiledResult<Alg, CMap> = Result<
    (),
    GeneratePixelBufferTiledError<
        <Alg as FractalAlgorithm>::Failure,
        <CMap as ColourMap<<Alg as FractalAlgorithm>::Success>>::Failure,
    >,
>;

/// Overwrites every pixel of `pixel_buffer` by running `algorithm` and
/// `colour_map` over disjoint tiles in parallel on the current rayon pool.
///
/// The buffer is split into bands one tile high, and each band row into
/// segments one tile wide, so every tile owns mutable slices of exactly its
/// own pixels and no locking is needed. Returns once every tile is written.
pub fn generate_pixel_buffer_tiled<Alg, CMap>(
    pixel_buffer: &mut PixelBuffer,
    algorithm: &Alg,
    colour_map: &CMap,
    tile_size: TileSize,
) -> TiledResult<Alg, CMap>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
    Alg::Failure: Send,
    CMap::Failure: Send,
{
    let pixel_rect = pixel_buffer.pixel_rect();
    let (columns, _) = calculate_tile_grid(pixel_rect, tile_size);
    let row_stride = pixel_buffer.row_stride();
    let tile_stride = (tile_size.width.get() as usize).saturating_mul(BYTES_PER_PIXEL);
    let band_bytes = row_stride.saturating_mul(tile_size.height.get() as usize);

    pixel_buffer
        .buffer_mut()
        .par_chunks_mut(band_bytes)
        .enumerate()
        .try_for_each(|(tile_row, band)| {
            let mut tiles: Vec<Vec<&mut [u8]>> = (0..columns).map(|_| Vec::new()).collect();

            for line in band.chunks_mut(row_stride) {
                for (column, segment) in line.chunks_mut(tile_stride).enumerate() {
                    tiles[column].push(segment);
                }
            }

            tiles
                .into_par_iter()
                .enumerate()
                .try_for_each(|(tile_column, rows)| {
                    let tile = tile_at(pixel_rect, tile_size, tile_column as u32, tile_row as u32)
                        .map_err(GeneratePixelBufferTiledError::PixelRect)?;

                    render_tile(tile, rows, algorithm, colour_map)
                })
        })
}

fn render_tile<Alg, CMap>(
    tile: PixelRect,
    rows: Vec<&mut [u8]>,
    algorithm: &Alg,
    colour_map: &CMap,
) -> TiledResult<Alg, CMap>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    debug_assert_eq!(rows.len(), tile.height() as usize);

    for (y, row) in (tile.top_left().y..=tile.bottom_right().y).zip(rows) {
        debug_assert_eq!(row.len(), tile.width() as usize * BYTES_PER_PIXEL);

        let xs = tile.top_left().x..=tile.bottom_right().x;

        for (x, rgba) in xs.zip(row.chunks_exact_mut(BYTES_PER_PIXEL)) {
            let value = algorithm
                .compute(Point { x, y })
                .map_err(GeneratePixelBufferTiledError::Algorithm)?;
            let colour = colour_map
                .map(value)
                .map_err(GeneratePixelBufferTiledError::ColourMap)?;

            rgba.copy_from_slice(&colour.to_rgba());
        }
    }

    Ok(())
}

use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::data::tile_size::TileSize;

/// Number of tile columns and rows needed to cover `pixel_rect`.
#[must_use]
pub fn calculate_tile_grid(pixel_rect: PixelRect, tile_size: TileSize) -> (u32, u32) {
    (
        pixel_rect.width().div_ceil(tile_size.width.get()),
        pixel_rect.height().div_ceil(tile_size.height.get()),
    )
}

/// The tile at `column`, `row` of the grid, clipped to `pixel_rect` so that
/// tiles on the right and bottom edges may be smaller than `tile_size`.
pub fn tile_at(
    pixel_rect: PixelRect,
    tile_size: TileSize,
    column: u32,
    row: u32,
) -> Result<PixelRect, PixelRectError> {
    let origin = pixel_rect.top_left();
    let left = origin.x + column * tile_size.width.get();
    let top = origin.y + row * tile_size.height.get();

    let right = left
        .saturating_add(tile_size.width.get() - 1)
        .min(pixel_rect.bottom_right().x);
    let bottom = top
        .saturating_add(tile_size.height.get() - 1)
        .min(pixel_rect.bottom_right().y);

    PixelRect::new(
        Point { x: left, y: top },
        Point {
            x: right,
            y: bottom,
        },
    )
}

/// Partitions `pixel_rect` into disjoint tiles covering every pixel exactly
/// once, listed row by row.
pub fn calculate_tiles_in_pixel_rect(
    pixel_rect: PixelRect,
    tile_size: TileSize,
) -> Result<Vec<PixelRect>, PixelRectError> {
    let (columns, rows) = calculate_tile_grid(pixel_rect, tile_size);

    (0..rows)
        .flat_map(|row| (0..columns).map(move |column| (column, row)))
        .map(|(column, row)| tile_at(pixel_rect, tile_size, column, row))
        .collect()
}

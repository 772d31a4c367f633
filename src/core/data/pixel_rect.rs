use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error(
        "pixel rect corners are inverted: top-left ({}, {}) bottom-right ({}, {})",
        .top_left.x, .top_left.y, .bottom_right.x, .bottom_right.y
    )]
    InvertedCorners { top_left: Point, bottom_right: Point },
    #[error("pixel rect size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// A rectangle of pixels with inclusive corners. Used both for the whole
/// image and for the tiles it is partitioned into, so a single pixel is a
/// valid rect.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        if bottom_right.x < top_left.x || bottom_right.y < top_left.y {
            return Err(PixelRectError::InvertedCorners {
                top_left,
                bottom_right,
            });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// A `width` by `height` rect anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: width - 1,
                y: height - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.bottom_right.x - self.top_left.x + 1
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom_right.y - self.top_left.y + 1
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn contains_rect(&self, other: PixelRect) -> bool {
        self.contains_point(other.top_left) && self.contains_point(other.bottom_right)
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Row-major iterator over every pixel in the rect.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let Self {
            top_left,
            bottom_right,
        } = *self;

        (top_left.y..=bottom_right.y)
            .flat_map(move |y| (top_left.x..=bottom_right.x).map(move |x| Point { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let top_left = Point { x: 0, y: 0 };
        let bottom_right = Point { x: 100, y: 100 };

        let rect = PixelRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
    }

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::new(Point { x: 10, y: 20 }, Point { x: 130, y: 120 }).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.size(), 12221);
    }

    #[test]
    fn test_single_pixel_rect_is_valid() {
        let rect = PixelRect::new(Point { x: 7, y: 3 }, Point { x: 7, y: 3 }).unwrap();

        assert_eq!(rect.width(), 1);
        assert_eq!(rect.height(), 1);
        assert_eq!(rect.size(), 1);
    }

    #[test]
    fn test_pixel_rect_corners_must_not_be_inverted() {
        let inverted_x = PixelRect::new(Point { x: 5, y: 0 }, Point { x: 4, y: 10 });
        let inverted_y = PixelRect::new(Point { x: 0, y: 5 }, Point { x: 10, y: 4 });

        assert_eq!(
            inverted_x,
            Err(PixelRectError::InvertedCorners {
                top_left: Point { x: 5, y: 0 },
                bottom_right: Point { x: 4, y: 10 },
            })
        );
        assert!(matches!(
            inverted_y,
            Err(PixelRectError::InvertedCorners { .. })
        ));
    }

    #[test]
    fn test_from_size() {
        let rect = PixelRect::from_size(800, 600).unwrap();

        assert_eq!(rect.top_left(), Point { x: 0, y: 0 });
        assert_eq!(rect.bottom_right(), Point { x: 799, y: 599 });
        assert_eq!(
            PixelRect::from_size(0, 600),
            Err(PixelRectError::InvalidSize {
                width: 0,
                height: 600
            })
        );
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(Point { x: 50, y: 50 }, Point { x: 100, y: 100 }).unwrap();

        assert!(rect.contains_point(Point { x: 75, y: 75 }));
        assert!(rect.contains_point(Point { x: 50, y: 50 }));
        assert!(rect.contains_point(Point { x: 100, y: 100 }));
        assert!(!rect.contains_point(Point { x: 101, y: 75 }));
        assert!(!rect.contains_point(Point { x: 49, y: 75 }));
        assert!(!rect.contains_point(Point { x: 75, y: 49 }));
        assert!(!rect.contains_point(Point { x: 75, y: 101 }));
    }

    #[test]
    fn test_contains_rect() {
        let outer = PixelRect::from_size(10, 10).unwrap();
        let inner = PixelRect::new(Point { x: 2, y: 2 }, Point { x: 9, y: 9 }).unwrap();
        let overhanging = PixelRect::new(Point { x: 5, y: 5 }, Point { x: 10, y: 9 }).unwrap();

        assert!(outer.contains_rect(inner));
        assert!(!outer.contains_rect(overhanging));
    }

    #[test]
    fn test_points_are_row_major() {
        let rect = PixelRect::new(Point { x: 1, y: 1 }, Point { x: 2, y: 2 }).unwrap();
        let points: Vec<Point> = rect.points().collect();

        assert_eq!(
            points,
            vec![
                Point { x: 1, y: 1 },
                Point { x: 2, y: 1 },
                Point { x: 1, y: 2 },
                Point { x: 2, y: 2 },
            ]
        );
    }
}

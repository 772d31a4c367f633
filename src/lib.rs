mod adapters;
mod controllers;
mod core;
mod presenters;

pub use crate::controllers::engine::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, EngineConfig, EngineError, FractalRenderEngine,
};
pub use crate::controllers::explorer::{
    Direction, ExplorerController, ExplorerError, NavigationCommand, NavigationLimits,
    ParseNavigationCommandError, RenderReport, navigate,
};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;

pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer_tiled::{
    GeneratePixelBufferTiledError, generate_pixel_buffer_tiled,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::tile_size::{DEFAULT_TILE_EDGE, TileSize};
pub use crate::core::data::viewport::{
    DEFAULT_POSITION, DEFAULT_RESOLUTION, DEFAULT_ZOOM, Position, Viewport, ViewportError,
};
pub use crate::core::fractals::mandelbrot::algorithm::{
    ESCAPE_RADIUS_SQUARED, MandelbrotAlgorithm, escape_time,
};
pub use crate::core::fractals::mandelbrot::colour_maps::teal_red::{
    MEMBER_COLOUR, MandelbrotTealRed,
};
pub use crate::core::fractals::mandelbrot::errors::{MandelbrotColourMapError, MandelbrotError};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::util::calculate_tiles_in_pixel_rect::calculate_tiles_in_pixel_rect;
pub use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, PixelToComplexMapping,
};

pub use crate::presenters::file::ppm::{PpmFilePresenter, screenshot_file_name};
pub use crate::presenters::status::{
    CONTROLS_HELP, format_render_time, format_rendering_parameters,
};

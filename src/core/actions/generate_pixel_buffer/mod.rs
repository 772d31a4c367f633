pub mod generate_pixel_buffer;
pub mod generate_pixel_buffer_tiled;
pub mod ports;

pub mod generate_fractal_serial;
pub mod ports;

pub mod engine;
pub mod explorer;
pub mod ports;

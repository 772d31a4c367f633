pub mod file;
pub mod status;

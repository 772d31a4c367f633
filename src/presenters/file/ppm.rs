use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// File name for a screenshot taken at `now`, e.g. `screenshot-1700000000.ppm`.
#[must_use]
pub fn screenshot_file_name(now: SystemTime) -> String {
    let seconds = now
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);

    format!("screenshot-{seconds}.ppm")
}

/// Writes buffers as binary PPM (P6). Alpha is dropped.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to<W: Write>(&self, buffer: &PixelBuffer, mut writer: W) -> std::io::Result<()> {
        // P6 means binary RGB, then width, height and max colour value
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
        writeln!(writer, "255")?;
        writer.write_all(&rgba_to_rgb(buffer.buffer()))?;
        writer.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        let file = File::create(filepath)?;
        self.write_to(buffer, BufWriter::new(file))?;

        info!(path = %filepath.display(), "image saved");

        Ok(())
    }
}

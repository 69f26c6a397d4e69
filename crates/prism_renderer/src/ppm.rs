//! Binary PPM (P6) output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::{Framebuffer, RenderResult};

/// Write packed RGB bytes as a binary PPM.
///
/// `rgb` must hold exactly `width * height` triples, top row first.
pub fn write_ppm<W: Write>(writer: &mut W, width: u32, height: u32, rgb: &[u8]) -> io::Result<()> {
    let expected = width as usize * height as usize * 3;
    if rgb.len() != expected {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("expected {} bytes of RGB data, got {}", expected, rgb.len()),
        ));
    }

    write!(writer, "P6\n{} {}\n255\n", width, height)?;
    writer.write_all(rgb)?;
    writer.flush()
}

/// Tone map a framebuffer and save it as a binary PPM file.
pub fn save_ppm(path: impl AsRef<Path>, framebuffer: &Framebuffer) -> RenderResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_ppm(
        &mut writer,
        framebuffer.width,
        framebuffer.height,
        &framebuffer.to_rgb8(),
    )?;

    log::info!("Saved to {}", path.display());
    Ok(())
}

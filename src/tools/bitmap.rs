//! Bitmap source and sink. Only the fixed size header is understood: the dimensions are
//! read from it and it is copied back verbatim. The payload is treated as opaque bytes.

use std::fs::File;
use std::io::Write;

use log::debug;

use crate::error::{HuffError, Result};

/// Size of the BITMAPFILEHEADER + BITMAPINFOHEADER pair.
pub const HEADER_SIZE: usize = 54;
const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// The leading header bytes, exactly as read.
    pub header: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// `width * height` bytes following the header.
    pub pixels: Vec<u8>,
}

impl Bitmap {
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }
}

fn unavailable<S: ToString>(path: &str, reason: S) -> HuffError {
    HuffError::InputUnavailable {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

fn read_dimension(data: &[u8], offset: usize) -> u32 {
    let mut field = [0_u8; 4];
    field.copy_from_slice(&data[offset..offset + 4]);
    // Negative heights mark top-down bitmaps.
    i32::from_le_bytes(field).unsigned_abs()
}

/// Strip the `header_size` byte header from the bitmap at `path` and return it together
/// with the `width * height` payload bytes that follow.
pub fn read_bitmap(path: &str, header_size: usize) -> Result<Bitmap> {
    if header_size < HEIGHT_OFFSET + 4 {
        return Err(unavailable(
            path,
            format!(
                "a {} byte header cannot hold the image dimensions",
                header_size
            ),
        ));
    }
    let data = std::fs::read(path).map_err(|e| unavailable(path, e))?;
    if data.len() < header_size {
        return Err(unavailable(
            path,
            format!("file is {} bytes, shorter than its header", data.len()),
        ));
    }

    let width = read_dimension(&data, WIDTH_OFFSET);
    let height = read_dimension(&data, HEIGHT_OFFSET);
    let size = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| unavailable(path, format!("{}x{} is too large", width, height)))?;
    let payload = &data[header_size..];
    if payload.len() < size {
        return Err(unavailable(
            path,
            format!(
                "payload holds {} bytes, {}x{} needs {}",
                payload.len(),
                width,
                height,
                size
            ),
        ));
    }
    debug!(
        "Bitmap {} is {}x{}, {} trailing bytes ignored.",
        path,
        width,
        height,
        payload.len() - size
    );

    Ok(Bitmap {
        header: data[..header_size].to_vec(),
        width,
        height,
        pixels: payload[..size].to_vec(),
    })
}

/// Write `header` followed by `pixels` to `path`.
pub fn write_bitmap(path: &str, header: &[u8], pixels: &[u8]) -> Result<()> {
    let mut f_out = File::create(path)?;
    f_out.write_all(header)?;
    f_out.write_all(pixels)?;
    debug!("Wrote {} header and {} pixel bytes to {}.", header.len(), pixels.len(), path);
    Ok(())
}

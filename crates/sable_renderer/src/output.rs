//! Final 8-bit image and file output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use bytemuck::{Pod, Zeroable};

use crate::bucket::BucketResult;
use crate::error::OutputError;

/// One display pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Row-major RGB image, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb8>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    ///
    /// Callers are expected to have checked the size with [`Self::byte_len`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb8::default(); width as usize * height as usize],
        }
    }

    /// Bytes needed for a `width` x `height` image, or `None` if that many
    /// pixels cannot be addressed in one allocation.
    pub fn byte_len(width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(std::mem::size_of::<Rgb8>())
            .filter(|&len| len <= isize::MAX as usize)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Rgb8 {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb8) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Copy a finished bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        let row_len = bucket.width as usize;

        for (local_y, row) in result.pixels.chunks_exact(row_len).enumerate() {
            let start = ((bucket.y as usize + local_y) * self.width as usize) + bucket.x as usize;
            self.pixels[start..start + row_len].copy_from_slice(row);
        }
    }

    /// Packed `r, g, b` bytes, row by row.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Write as plain-text PPM (`P3`).
    ///
    /// One pixel per line, rows from the top of the image down.
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;
        for p in &self.pixels {
            writeln!(writer, "{} {} {}", p.r, p.g, p.b)?;
        }
        writer.flush()
    }

    /// Save to `path`.
    ///
    /// `.ppm` files are written as text PPM; every other extension goes
    /// through the `image` crate, which picks the format from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), OutputError> {
        let path = path.as_ref();
        let is_ppm = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

        if is_ppm {
            let io_err = |source| OutputError::Io {
                path: path.to_path_buf(),
                source,
            };
            let file = File::create(path).map_err(io_err)?;
            self.write_ppm(BufWriter::new(file)).map_err(io_err)?;
        } else {
            image::save_buffer(
                path,
                self.as_bytes(),
                self.width,
                self.height,
                image::ColorType::Rgb8,
            )
            .map_err(|source| OutputError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        }

        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::Bucket;

    fn checker() -> ImageBuffer {
        let mut image = ImageBuffer::new(2, 2);
        image.set(0, 0, Rgb8::new(255, 0, 0));
        image.set(1, 0, Rgb8::new(0, 255, 0));
        image.set(0, 1, Rgb8::new(0, 0, 255));
        image.set(1, 1, Rgb8::new(10, 20, 30));
        image
    }

    #[test]
    fn test_bytes_are_packed_rgb() {
        let image = checker();
        assert_eq!(
            image.as_bytes(),
            &[255, 0, 0, 0, 255, 0, 0, 0, 255, 10, 20, 30]
        );
    }

    #[test]
    fn test_ppm_layout() {
        let mut out = Vec::new();
        checker().write_ppm(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "P3\n2 2\n255\n255 0 0\n0 255 0\n0 0 255\n10 20 30\n"
        );
    }

    #[test]
    fn test_write_bucket_places_rows() {
        let mut image = ImageBuffer::new(4, 3);
        let red = Rgb8::new(255, 0, 0);
        let result = BucketResult::new(Bucket::new(1, 1, 2, 2, 0), vec![red; 4]);
        image.write_bucket(&result);

        for y in 0..3 {
            for x in 0..4 {
                let expected = if (1..3).contains(&x) && (1..3).contains(&y) {
                    red
                } else {
                    Rgb8::default()
                };
                assert_eq!(image.get(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_save_ppm_and_png() {
        let dir = std::env::temp_dir().join(format!("sable_image_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let image = checker();

        let ppm = dir.join("out.ppm");
        image.save(&ppm).unwrap();
        assert!(std::fs::read_to_string(&ppm).unwrap().starts_with("P3\n2 2\n255\n"));

        let png = dir.join("out.png");
        image.save(&png).unwrap();
        let bytes = std::fs::read(&png).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_reports_path_on_failure() {
        let path = std::env::temp_dir()
            .join("sable_missing_dir_for_test")
            .join("nested")
            .join("out.ppm");
        let err = checker().save(&path).unwrap_err();

        assert!(matches!(err, OutputError::Io { .. }));
        assert!(err.to_string().contains("out.ppm"));
    }

    #[test]
    fn test_byte_len_limits() {
        assert_eq!(ImageBuffer::byte_len(4, 3), Some(36));
        // Pixel count beyond u32 range is still addressable
        assert_eq!(
            ImageBuffer::byte_len(70_000, 70_000),
            Some(70_000 * 70_000 * 3)
        );
        assert_eq!(ImageBuffer::byte_len(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn test_wide_image_indexing() {
        let mut image = ImageBuffer::new(70_000, 1);
        image.set(69_999, 0, Rgb8::new(1, 2, 3));
        assert_eq!(image.get(69_999, 0), Rgb8::new(1, 2, 3));
        assert_eq!(image.pixels.len(), 70_000);
    }
}

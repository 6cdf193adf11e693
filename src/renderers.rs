use std::path::Path;

use image::{GrayImage, Luma};
use log::info;

use crate::bitmap::{Bitmap, Pixel};
use crate::coordinates::PixelCoordinate;
use crate::errors::*;

const WALL_LUMA: Luma<u8> = Luma([0x00]);
const PASSAGE_LUMA: Luma<u8> = Luma([0xff]);

/// Greyscale image of a maze, each maze pixel drawn as a `cell_pixels` sized
/// square. Passages are white and walls are black.
///
/// A `cell_pixels` of 0 is treated as 1.
pub fn to_luma_image(maze: &Bitmap, cell_pixels: u8) -> GrayImage {
    let scale = u32::from(cell_pixels.max(1));
    let width = maze.width() as u32 * scale;
    let height = maze.height() as u32 * scale;

    GrayImage::from_fn(width, height, |x, y| {
        match maze.pixel(PixelCoordinate::new(x / scale, y / scale)) {
            Pixel::Wall => WALL_LUMA,
            Pixel::Passage => PASSAGE_LUMA,
        }
    })
}

/// Write the maze out as a PNG file.
pub fn save_png<P: AsRef<Path>>(maze: &Bitmap, path: P, cell_pixels: u8) -> Result<()> {
    let path = path.as_ref();
    let img = to_luma_image(maze, cell_pixels);
    img.save_with_format(path, image::ImageFormat::Png)
        .chain_err(|| format!("Failed to write maze image {}", path.display()))?;
    info!("Saved {} maze as {}x{} image to {}",
          maze.size(),
          img.width(),
          img.height(),
          path.display());
    Ok(())
}

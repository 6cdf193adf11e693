use std::fmt;

use bit_set::BitSet;

use crate::coordinates::PixelCoordinate;
use crate::maze_size::MazeSize;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Pixel {
    /// Black: an unvisited node cell or a closed connector.
    Wall,
    /// White: a visited node cell or an opened connector.
    Passage,
}

/// 2-colour raster holding a maze.
///
/// During generation the same bitmap is the visited set: a node cell is
/// visited exactly when its pixel is a passage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    passages: BitSet,
    size: MazeSize,
}

impl Bitmap {
    /// A bitmap with every pixel set to `Pixel::Wall`.
    pub fn walled(size: MazeSize) -> Bitmap {
        Bitmap {
            passages: BitSet::with_capacity(size.pixel_count()),
            size,
        }
    }

    #[inline(always)]
    pub fn size(&self) -> MazeSize {
        self.size
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.size.width()
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.size.height()
    }

    /// Panics if `coord` lies outside the bitmap.
    pub fn pixel(&self, coord: PixelCoordinate) -> Pixel {
        if self.passages.contains(self.bit_index(coord)) {
            Pixel::Passage
        } else {
            Pixel::Wall
        }
    }

    /// `None` for coordinates outside the bitmap.
    pub fn get(&self, coord: PixelCoordinate) -> Option<Pixel> {
        if self.size.contains(coord) {
            Some(self.pixel(coord))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_passage(&self, coord: PixelCoordinate) -> bool {
        self.pixel(coord) == Pixel::Passage
    }

    #[inline]
    pub fn is_wall(&self, coord: PixelCoordinate) -> bool {
        self.pixel(coord) == Pixel::Wall
    }

    pub fn set(&mut self, coord: PixelCoordinate, pixel: Pixel) {
        let index = self.bit_index(coord);
        match pixel {
            Pixel::Passage => {
                let _ = self.passages.insert(index);
            }
            Pixel::Wall => {
                let _ = self.passages.remove(index);
            }
        }
    }

    pub fn open(&mut self, coord: PixelCoordinate) {
        self.set(coord, Pixel::Passage);
    }

    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }

    pub fn wall_count(&self) -> usize {
        self.size.pixel_count() - self.passage_count()
    }

    /// Coordinates of every passage pixel in row major order.
    ///
    /// Walks the pixel indices rather than `BitSet::iter`, whose size hint
    /// undercounts and breaks adaptors such as `filter(..).count()`.
    pub fn iter_passages<'a>(&'a self) -> impl Iterator<Item = PixelCoordinate> + 'a {
        let width = self.width();
        (0..self.size.pixel_count())
            .filter(move |&i| self.passages.contains(i))
            .map(move |i| PixelCoordinate::new((i % width) as u32, (i / width) as u32))
    }

    /// Rows of pixels, top to bottom.
    pub fn rows<'a>(&'a self) -> impl Iterator<Item = Vec<Pixel>> + 'a {
        (0..self.height() as u32).map(move |y| {
            (0..self.width() as u32)
                .map(|x| self.pixel(PixelCoordinate::new(x, y)))
                .collect()
        })
    }

    fn bit_index(&self, coord: PixelCoordinate) -> usize {
        assert!(self.size.contains(coord),
                "pixel {} outside of {} bitmap",
                coord,
                self.size);
        coord.y as usize * self.width() + coord.x as usize
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL: &str = "█";
        const PASSAGE: &str = " ";

        for row in self.rows() {
            for pixel in row {
                f.write_str(match pixel {
                    Pixel::Wall => WALL,
                    Pixel::Passage => PASSAGE,
                })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

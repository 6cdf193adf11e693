use std::cmp;
use std::fmt;

use error_chain::bail;

use crate::coordinates::PixelCoordinate;
use crate::errors::*;
use crate::units::{EdgesCount, Height, NodesCount, Width};

/// Smallest side length that still holds one interior node ring.
pub const MIN_MAZE_DIMENSION: usize = 5;
/// Largest side length the driver will ask for by default.
pub const MAX_MAZE_DIMENSION: usize = 199;

/// Pixel dimensions of a maze bitmap, border included.
///
/// Both sides are odd and at least `MIN_MAZE_DIMENSION`. The only way to get
/// a `MazeSize` is through `MazeSize::new` (or `SizeBounds`, which clamps), so
/// the generator can rely on odd/odd node addressing without checking again.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub struct MazeSize {
    width: usize,
    height: usize,
}

impl MazeSize {
    pub fn new(width: Width, height: Height) -> Result<MazeSize> {
        if is_valid_dimension(width.0) && is_valid_dimension(height.0) {
            Ok(MazeSize {
                width: width.0,
                height: height.0,
            })
        } else {
            bail!(ErrorKind::InvalidMazeSize(width.0, height.0))
        }
    }

    pub fn square(side: usize) -> Result<MazeSize> {
        MazeSize::new(Width(side), Height(side))
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of node cells along the x axis.
    #[inline(always)]
    pub fn node_columns(&self) -> usize {
        (self.width - 1) / 2
    }

    /// Number of node cells along the y axis.
    #[inline(always)]
    pub fn node_rows(&self) -> usize {
        (self.height - 1) / 2
    }

    pub fn node_count(&self) -> NodesCount {
        NodesCount(self.node_columns() * self.node_rows())
    }

    /// Edges in any spanning tree over the node cells.
    pub fn spanning_tree_edges(&self) -> EdgesCount {
        EdgesCount(self.node_count().0 - 1)
    }

    pub fn contains(&self, coord: PixelCoordinate) -> bool {
        (coord.x as usize) < self.width && (coord.y as usize) < self.height
    }

    /// Inside `[1, size - 2]` on both axes, i.e. not on the outer wall.
    pub fn is_interior(&self, coord: PixelCoordinate) -> bool {
        let (x, y) = (coord.x as usize, coord.y as usize);
        x >= 1 && y >= 1 && x + 2 <= self.width && y + 2 <= self.height
    }

    /// Node cells in row major order.
    pub fn node_cells(&self) -> impl Iterator<Item = PixelCoordinate> {
        let columns = self.node_columns() as u32;
        let rows = self.node_rows() as u32;
        (0..rows).flat_map(move |row| {
            (0..columns).map(move |column| PixelCoordinate::new(column * 2 + 1, row * 2 + 1))
        })
    }
}

impl fmt::Display for MazeSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn is_valid_dimension(n: usize) -> bool {
    n >= MIN_MAZE_DIMENSION && n % 2 == 1
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Resize {
    Grow,
    Shrink,
}

/// How far a single resize request moves one side.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum SizeStep {
    Fine,
    Coarse,
}

impl SizeStep {
    pub fn pixels(&self) -> usize {
        match *self {
            SizeStep::Fine => 2,
            SizeStep::Coarse => 20,
        }
    }
}

/// The odd `[min, max]` range that size requests from outside the core are
/// forced into before a maze is generated.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct SizeBounds {
    min: usize,
    max: usize,
}

impl Default for SizeBounds {
    fn default() -> SizeBounds {
        SizeBounds {
            min: MIN_MAZE_DIMENSION,
            max: MAX_MAZE_DIMENSION,
        }
    }
}

impl SizeBounds {
    pub fn new(min: usize, max: usize) -> Result<SizeBounds> {
        if !is_valid_dimension(min) || !is_valid_dimension(max) || min > max {
            bail!(ErrorKind::InvalidMazeSize(min, max));
        }
        Ok(SizeBounds { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Force any requested side length to the nearest odd length in bounds.
    /// Even lengths round down unless that would leave the range.
    pub fn clamp(&self, requested: usize) -> usize {
        let n = cmp::min(cmp::max(requested, self.min), self.max);
        if n % 2 == 1 {
            n
        } else if n - 1 >= self.min {
            n - 1
        } else {
            n + 1
        }
    }

    pub fn clamp_size(&self, width: Width, height: Height) -> MazeSize {
        MazeSize {
            width: self.clamp(width.0),
            height: self.clamp(height.0),
        }
    }

    /// Grow or shrink one side of `size` by `step`.
    ///
    /// A step that would overshoot a bound lands on the bound instead. Returns
    /// `None` when the side already sits on or beyond that bound, so a step
    /// never moves against the requested direction and there is no need for a
    /// new maze.
    pub fn step(&self,
                size: MazeSize,
                axis: Axis,
                resize: Resize,
                step: SizeStep)
                -> Option<MazeSize> {

        let current = match axis {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        };
        let change = step.pixels();

        let next = match resize {
            Resize::Grow => {
                if current >= self.max {
                    return None;
                }
                cmp::min(current + change, self.max)
            }
            Resize::Shrink => {
                if current <= self.min {
                    return None;
                }
                cmp::max(current.saturating_sub(change), self.min)
            }
        };

        Some(match axis {
            Axis::Horizontal => MazeSize { width: next, ..size },
            Axis::Vertical => MazeSize { height: next, ..size },
        })
    }
}

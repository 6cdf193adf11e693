use std::convert::From;
use std::fmt;

/// Distance between two neighbouring node cells along one axis.
pub const NODE_STEP: i32 = 2;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct PixelCoordinate {
    pub x: u32,
    pub y: u32,
}
impl PixelCoordinate {
    pub fn new(x: u32, y: u32) -> PixelCoordinate {
        PixelCoordinate { x, y }
    }

    /// Both axes odd, i.e. a maze intersection.
    pub fn is_node_cell(&self) -> bool {
        self.x % 2 == 1 && self.y % 2 == 1
    }

    /// Move by `offset`. The caller guarantees the result stays non-negative;
    /// `Node` only ever hands out offsets that keep inside the maze.
    pub fn offset_by(&self, offset: PathOffset) -> PixelCoordinate {
        PixelCoordinate {
            x: self.x.wrapping_add(offset.dx as u32),
            y: self.y.wrapping_add(offset.dy as u32),
        }
    }
}
impl From<(u32, u32)> for PixelCoordinate {
    fn from(x_y_pair: (u32, u32)) -> PixelCoordinate {
        PixelCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}
impl fmt::Display for PixelCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A direction from one node cell to the next, measured in pixels.
/// Exactly one of `dx` / `dy` is non-zero and it is always `±NODE_STEP`.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct PathOffset {
    pub dx: i32,
    pub dy: i32,
}
impl PathOffset {
    pub const LEFT: PathOffset = PathOffset { dx: -NODE_STEP, dy: 0 };
    pub const RIGHT: PathOffset = PathOffset { dx: NODE_STEP, dy: 0 };
    pub const UP: PathOffset = PathOffset { dx: 0, dy: -NODE_STEP };
    pub const DOWN: PathOffset = PathOffset { dx: 0, dy: NODE_STEP };

    pub const ALL: [PathOffset; 4] = [PathOffset::LEFT,
                                      PathOffset::RIGHT,
                                      PathOffset::UP,
                                      PathOffset::DOWN];

    /// Half of the step: the offset from a node cell to the connector cell
    /// that joins it with its neighbour.
    pub fn half(&self) -> PathOffset {
        PathOffset {
            dx: self.dx / 2,
            dy: self.dy / 2,
        }
    }

    pub fn reversed(&self) -> PathOffset {
        PathOffset {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

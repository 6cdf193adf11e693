//! **bitmaze** generates perfect mazes with a randomized depth-first search and hands them
//! over as 2-colour bitmaps.
//!
//! ```no_run
//! use bitmaze::{generators, maze_size::MazeSize};
//!
//! let maze = generators::generate(MazeSize::square(21).unwrap());
//! print!("{}", maze);
//! ```

pub mod analysis;
pub mod bitmap;
pub mod coordinates;
pub mod errors;
pub mod generators;
pub mod maze_size;
pub mod node;
pub mod renderers;
pub mod units;
mod utils;

pub use crate::bitmap::{Bitmap, Pixel};
pub use crate::maze_size::MazeSize;

// Other modules `use crate::errors::*;` to get the Error, ErrorKind, ResultExt
// and Result types `error_chain!` creates.
use error_chain::error_chain;

use crate::maze_size::MIN_MAZE_DIMENSION;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        ImageError(::image::ImageError);
    }

    errors {
        InvalidMazeSize(width: usize, height: usize) {
            description("invalid maze size")
            display("invalid maze size {}x{}: both sides must be odd and at least {}",
                    width, height, MIN_MAZE_DIMENSION)
        }
        ImperfectMaze(reason: String) {
            description("maze is not a spanning tree")
            display("maze is not a spanning tree: {}", reason)
        }
    }
}

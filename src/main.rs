use bitmaze::{
    analysis::MazeReport,
    generators,
    maze_size::{Axis, MazeSize, Resize, SizeBounds, SizeStep},
    renderers,
    units::{Height, Width},
};
use docopt::Docopt;
use error_chain::bail;
use log::{info, warn};
use serde_derive::Deserialize;

const USAGE: &str = "bitmaze

Generate a perfect maze with a randomized depth-first search.

Usage:
    bitmaze -h | --help
    bitmaze [(--size=<n>|[--width=<w> --height=<h>])] [--grow=<axis> | --shrink=<axis>] [--coarse] [--seed=<s>] [--image-out=<path> --cell-pixels=<n>] [--text] [--verify]

Options:
    -h --help              Show this screen.
    --size=<n>             The maze is n * n pixels, border included.
    --width=<w>            Maze width in pixels, odd and at least 5 [default: 199].
    --height=<h>           Maze height in pixels, odd and at least 5 [default: 199].
    --grow=<axis>          Grow the x or y side by one step, up to the largest maze.
    --shrink=<axis>        Shrink the x or y side by one step, down to the smallest maze.
    --coarse               Resize steps are 20 pixels instead of 2.
    --seed=<s>             Seed the random source to get the same maze every time.
    --image-out=<path>     Output file path for an image of the maze. Always PNG format.
    --cell-pixels=<n>      Image pixels per maze pixel [default: 4] max 255.
    --text                 Print the maze as text.
    --verify               Check the maze is a spanning tree and fail if it is not.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_size: Option<usize>,
    flag_width: usize,
    flag_height: usize,
    flag_grow: Option<String>,
    flag_shrink: Option<String>,
    flag_coarse: bool,
    flag_seed: Option<u64>,
    flag_image_out: String,
    flag_cell_pixels: u8,
    flag_text: bool,
    flag_verify: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::bitmaze::errors::Error, ::bitmaze::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn parse_axis(name: &str) -> Result<Axis> {
    match name {
        "x" => Ok(Axis::Horizontal),
        "y" => Ok(Axis::Vertical),
        _ => bail!("unknown axis '{}', expected x or y", name),
    }
}

/// Applies any `--grow`/`--shrink` request, leaving the size alone when that
/// side is already on its bound.
fn resize(args: &MazeArgs, bounds: &SizeBounds, size: MazeSize) -> Result<MazeSize> {
    let (axis_name, direction) = match (&args.flag_grow, &args.flag_shrink) {
        (Some(axis), _) => (axis, Resize::Grow),
        (None, Some(axis)) => (axis, Resize::Shrink),
        (None, None) => return Ok(size),
    };
    let step = if args.flag_coarse { SizeStep::Coarse } else { SizeStep::Fine };

    match bounds.step(size, parse_axis(axis_name)?, direction, step) {
        Some(resized) => {
            info!("Resized maze from {} to {}", size, resized);
            Ok(resized)
        }
        None => {
            warn!("Maze size {} is already at its {:?} limit", size, direction);
            Ok(size)
        }
    }
}

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let (width, height) = if let Some(square_size) = args.flag_size {
        (square_size, square_size)
    } else {
        (args.flag_width, args.flag_height)
    };

    let bounds = SizeBounds::default();
    let size = bounds.clamp_size(Width(width), Height(height));
    if size.width() != width || size.height() != height {
        warn!("Requested maze size {}x{} clamped to {} (odd sides between {} and {})",
              width,
              height,
              size,
              bounds.min(),
              bounds.max());
    }
    let size = resize(&args, &bounds, size)?;

    let maze = match args.flag_seed {
        Some(seed) => {
            info!("Generating {} maze with seed {}", size, seed);
            generators::generate_seeded(size, seed)
        }
        None => {
            info!("Generating {} maze", size);
            generators::generate(size)
        }
    };

    if args.flag_verify {
        let report = MazeReport::of(&maze);
        let problems = report.problems();
        if !problems.is_empty() {
            bail!(ErrorKind::Maze(bitmaze::errors::ErrorKind::ImperfectMaze(problems.join(", "))));
        }
        info!("Verified {} maze: {} node cells joined by {} passages",
              size,
              report.node_cells,
              report.open_connectors);
    }

    if !args.flag_image_out.is_empty() {
        renderers::save_png(&maze, &args.flag_image_out, args.flag_cell_pixels)?;
    }

    // Without any other output asked for, show the maze on the terminal.
    if args.flag_text || args.flag_image_out.is_empty() {
        print!("{}", maze);
    }

    Ok(())
}

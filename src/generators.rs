use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bitmap::Bitmap;
use crate::coordinates::PixelCoordinate;
use crate::maze_size::MazeSize;
use crate::node::Node;

/// Generate a maze with the thread local random source.
pub fn generate(size: MazeSize) -> Bitmap {
    randomized_depth_first(size, &mut rand::thread_rng())
}

/// Generate a maze that is a pure function of `size` and `seed`.
pub fn generate_seeded(size: MazeSize, seed: u64) -> Bitmap {
    let mut rng = StdRng::seed_from_u64(seed);
    randomized_depth_first(size, &mut rng)
}

/// Carve a perfect maze into a fully walled bitmap using a randomized
/// depth-first search.
///
/// Node cells (odd/odd pixels) are the vertices of the search and the pixel
/// between two neighbouring node cells is the edge. Starting from a random
/// node, the node on top of the stack gives up one random unexplored
/// direction per iteration. If the node cell in that direction is still a
/// wall it is marked visited, the connector to it is opened and it is pushed
/// so it gets explored next. A node is popped as soon as it runs out of
/// directions, and the search ends when the stack is empty. Every node cell
/// is reached and every edge is carved exactly once, so the result is a
/// spanning tree over the node cells.
///
/// The bitmap doubles as the visited set: a node cell has been visited
/// exactly when its pixel is a passage.
pub fn randomized_depth_first<R: Rng + ?Sized>(size: MazeSize, rng: &mut R) -> Bitmap {

    let mut maze = Bitmap::walled(size);

    let start = random_start(size, rng);
    maze.open(start);
    let mut stack: Vec<Node> = Vec::with_capacity(size.node_count().0);
    stack.push(Node::new(start, size));

    debug!("Carving {} maze ({} nodes) from {}", size, size.node_count().0, start);

    let mut peak_depth = stack.len();
    let mut carved = 0;

    while let Some(top) = stack.last_mut() {

        let from = top.coordinate();
        let path = top.pick_random_open_path(rng);
        let next = from.offset_by(path);

        // Drop an exhausted node now; the path it just handed out is still
        // followed below.
        if top.remaining_path_count() == 0 {
            let _ = stack.pop();
        }

        if maze.is_wall(next) {
            maze.open(next);
            maze.open(next.offset_by(path.reversed().half()));
            stack.push(Node::new(next, size));

            carved += 1;
            if stack.len() > peak_depth {
                peak_depth = stack.len();
            }
            trace!("Carved {} -> {}", from, next);
        }
    }

    debug!("Finished {} maze: {} passages carved, peak stack depth {}",
           size,
           carved,
           peak_depth);

    maze
}

/// A uniformly random node cell of a maze of `size`.
pub fn random_start<R: Rng + ?Sized>(size: MazeSize, rng: &mut R) -> PixelCoordinate {
    let column = rng.gen_range(0..size.node_columns());
    let row = rng.gen_range(0..size.node_rows());
    PixelCoordinate::new((column * 2 + 1) as u32, (row * 2 + 1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{reachable_node_cells, MazeReport};
    use crate::bitmap::Pixel;
    use crate::units::{Height, Width};
    use quickcheck::{quickcheck, TestResult};

    fn size(w: usize, h: usize) -> MazeSize {
        MazeSize::new(Width(w), Height(h)).unwrap()
    }

    fn open_connectors(maze: &Bitmap) -> usize {
        maze.iter_passages().filter(|c| !c.is_node_cell()).count()
    }

    #[test]
    fn five_by_five_maze() {
        let maze = generate_seeded(size(5, 5), 42);

        for &(x, y) in [(1, 1), (1, 3), (3, 1), (3, 3)].iter() {
            assert_eq!(maze.pixel(PixelCoordinate::new(x, y)), Pixel::Passage);
        }
        assert_eq!(open_connectors(&maze), 3);
        assert_eq!(maze.passage_count(), 7);
        assert_eq!(maze.wall_count(), 18);
        // the centre pixel joins nothing
        assert!(maze.is_wall(PixelCoordinate::new(2, 2)));
        assert!(MazeReport::of(&maze).is_perfect());
    }

    #[test]
    fn seven_by_seven_maze() {
        let maze = generate_seeded(size(7, 7), 2019);
        assert_eq!(open_connectors(&maze), 8);
        assert_eq!(maze.passage_count(), 17);

        let reachable = reachable_node_cells(&maze, PixelCoordinate::new(1, 1));
        assert_eq!(reachable.len(), 9);
        for coord in maze.size().node_cells() {
            assert!(reachable.contains(&coord), "{} not reachable", coord);
        }
    }

    #[test]
    fn every_node_cell_is_visited() {
        let s = size(31, 17);
        let maze = generate_seeded(s, 99);
        assert!(s.node_cells().all(|c| maze.is_passage(c)));
    }

    #[test]
    fn border_stays_walled() {
        let s = size(21, 13);
        let maze = generate_seeded(s, 5);
        for x in 0..s.width() as u32 {
            assert!(maze.is_wall(PixelCoordinate::new(x, 0)));
            assert!(maze.is_wall(PixelCoordinate::new(x, s.height() as u32 - 1)));
        }
        for y in 0..s.height() as u32 {
            assert!(maze.is_wall(PixelCoordinate::new(0, y)));
            assert!(maze.is_wall(PixelCoordinate::new(s.width() as u32 - 1, y)));
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let s = size(41, 25);
        assert_eq!(generate_seeded(s, 1_000), generate_seeded(s, 1_000));
    }

    #[test]
    fn injected_rng_matches_seeded_entry_point() {
        let s = size(15, 15);
        let mut rng = StdRng::seed_from_u64(31337);
        assert_eq!(randomized_depth_first(s, &mut rng), generate_seeded(s, 31337));
    }

    #[test]
    fn regeneration_differs() {
        let s = size(51, 51);
        assert_ne!(generate(s), generate(s));
        assert_ne!(generate_seeded(s, 1), generate_seeded(s, 2));
    }

    #[test]
    fn random_start_is_a_node_cell() {
        let s = size(9, 21);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let start = random_start(s, &mut rng);
            assert!(start.is_node_cell());
            assert!(s.is_interior(start));
        }
    }

    #[test]
    fn random_start_covers_smallest_maze() {
        let s = size(5, 5);
        let mut rng = StdRng::seed_from_u64(11);
        let starts: std::collections::HashSet<PixelCoordinate> =
            (0..200).map(|_| random_start(s, &mut rng)).collect();
        assert_eq!(starts.len(), 4);
    }

    #[test]
    fn quickcheck_mazes_are_spanning_trees() {

        fn prop(half_width: u8, half_height: u8, seed: u64) -> TestResult {
            // keep the mazes small enough for a fast property run
            let w = (half_width % 40) as usize * 2 + 5;
            let h = (half_height % 40) as usize * 2 + 5;
            let s = size(w, h);
            let maze = generate_seeded(s, seed);
            let report = MazeReport::of(&maze);

            TestResult::from_bool(report.is_perfect() &&
                                  report.open_connectors == s.spanning_tree_edges().0 &&
                                  maze.passage_count() == 2 * s.node_count().0 - 1)
        }
        quickcheck(prop as fn(u8, u8, u64) -> TestResult);
    }
}

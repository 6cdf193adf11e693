//! A single intersection of the maze while it is being carved.
//!
//! Nodes live on odd/odd pixels and may connect to the node two pixels away
//! in any of the four compass directions. The depth-first search needs to
//! know which of those directions have not been tried yet, which is all a
//! `Node` records.

use rand::Rng;
use smallvec::SmallVec;

use crate::coordinates::{PathOffset, PixelCoordinate, NODE_STEP};
use crate::maze_size::MazeSize;

pub type OpenPathsSmallVec = SmallVec<[PathOffset; 4]>;

#[derive(Debug, Clone)]
pub struct Node {
    coordinate: PixelCoordinate,
    open_paths: OpenPathsSmallVec,
}

impl Node {
    /// Create a node with every direction that stays inside `[1, size - 2]`
    /// on both axes still open.
    ///
    /// `coordinate` must be a node cell inside the maze.
    pub fn new(coordinate: PixelCoordinate, size: MazeSize) -> Node {
        debug_assert!(coordinate.is_node_cell() && size.is_interior(coordinate),
                      "node {} is not an interior node cell of a {} maze",
                      coordinate,
                      size);

        let step = NODE_STEP as usize;
        let (x, y) = (coordinate.x as usize, coordinate.y as usize);
        let mut open_paths = OpenPathsSmallVec::new();

        if x >= 1 + step {
            open_paths.push(PathOffset::LEFT);
        }
        if x + step + 2 <= size.width() {
            open_paths.push(PathOffset::RIGHT);
        }
        if y >= 1 + step {
            open_paths.push(PathOffset::UP);
        }
        if y + step + 2 <= size.height() {
            open_paths.push(PathOffset::DOWN);
        }

        Node {
            coordinate,
            open_paths,
        }
    }

    #[inline(always)]
    pub fn coordinate(&self) -> PixelCoordinate {
        self.coordinate
    }

    /// How many directions from this node are still unexplored.
    #[inline(always)]
    pub fn remaining_path_count(&self) -> usize {
        self.open_paths.len()
    }

    pub fn open_paths(&self) -> &[PathOffset] {
        &self.open_paths
    }

    /// Take one unexplored direction, chosen uniformly at random. It is never
    /// handed out again by this node.
    ///
    /// Panics if every direction has already been taken; the driver loop has
    /// to check `remaining_path_count` first.
    pub fn pick_random_open_path<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PathOffset {
        assert!(!self.open_paths.is_empty(),
                "no open paths left at node {}",
                self.coordinate);

        let index = rng.gen_range(0..self.open_paths.len());
        self.open_paths.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Height, Width};
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn size(w: usize, h: usize) -> MazeSize {
        MazeSize::new(Width(w), Height(h)).unwrap()
    }

    fn node(x: u32, y: u32, s: MazeSize) -> Node {
        Node::new(PixelCoordinate::new(x, y), s)
    }

    fn sorted_paths(n: &Node) -> Vec<(i32, i32)> {
        n.open_paths().iter().map(|p| (p.dx, p.dy)).sorted().collect()
    }

    #[test]
    fn corner_nodes_of_smallest_maze() {
        let s = size(5, 5);
        assert_eq!(sorted_paths(&node(1, 1, s)), vec![(0, 2), (2, 0)]);
        assert_eq!(sorted_paths(&node(3, 1, s)), vec![(-2, 0), (0, 2)]);
        assert_eq!(sorted_paths(&node(1, 3, s)), vec![(0, -2), (2, 0)]);
        assert_eq!(sorted_paths(&node(3, 3, s)), vec![(-2, 0), (0, -2)]);
    }

    #[test]
    fn interior_node_has_four_paths() {
        let n = node(3, 3, size(7, 7));
        assert_eq!(n.remaining_path_count(), 4);
        assert_eq!(sorted_paths(&n), vec![(-2, 0), (0, -2), (0, 2), (2, 0)]);
    }

    #[test]
    fn edge_nodes_of_wide_maze() {
        let s = size(9, 5);
        assert_eq!(node(5, 1, s).remaining_path_count(), 3);
        assert_eq!(sorted_paths(&node(7, 3, s)), vec![(-2, 0), (0, -2)]);
    }

    #[test]
    fn open_paths_never_leave_the_interior() {
        let s = size(11, 7);
        for coord in s.node_cells() {
            let n = Node::new(coord, s);
            for &p in n.open_paths() {
                let target = coord.offset_by(p);
                assert!(s.is_interior(target), "{} -> {} leaves the maze", coord, target);
                assert!(target.is_node_cell());
            }
        }
    }

    #[test]
    fn picking_drains_every_path_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut n = node(3, 3, size(7, 7));
        let mut picked = vec![];
        for remaining in (0..4).rev() {
            picked.push(n.pick_random_open_path(&mut rng));
            assert_eq!(n.remaining_path_count(), remaining);
        }
        let picked: Vec<(i32, i32)> = picked.iter().map(|p| (p.dx, p.dy)).sorted().collect();
        assert_eq!(picked, vec![(-2, 0), (0, -2), (0, 2), (2, 0)]);
    }

    #[test]
    fn picks_are_spread_over_all_directions() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut first_picks = [0usize; 4];
        for _ in 0..400 {
            let mut n = node(3, 3, size(7, 7));
            let p = n.pick_random_open_path(&mut rng);
            let i = PathOffset::ALL.iter().position(|&d| d == p).unwrap();
            first_picks[i] += 1;
        }
        assert!(first_picks.iter().all(|&count| count > 50), "{:?}", first_picks);
    }

    #[test]
    #[should_panic]
    fn picking_from_exhausted_node_panics() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut n = node(1, 1, size(5, 5));
        let _ = n.pick_random_open_path(&mut rng);
        let _ = n.pick_random_open_path(&mut rng);
        let _ = n.pick_random_open_path(&mut rng);
    }
}

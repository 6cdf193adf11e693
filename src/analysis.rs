//! Checks that a bitmap really holds a perfect maze.
//!
//! The node cells become the vertices of an undirected graph and every open
//! connector pixel between two node cells becomes an edge. A perfect maze is
//! then a spanning tree: one connected component, no cycles, and no white
//! pixels anywhere a passage cannot be.

use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Bfs;

use crate::bitmap::Bitmap;
use crate::coordinates::{PathOffset, PixelCoordinate};
use crate::utils::{fnv_hashmap, FnvHashMap};

/// Node cells as vertices, open connector pixels as edge weights.
pub type MazeGraph = UnGraph<PixelCoordinate, PixelCoordinate>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeReport {
    pub node_cells: usize,
    /// Node cells still black.
    pub unvisited_node_cells: usize,
    /// White pixels joining two node cells.
    pub open_connectors: usize,
    /// White pixels on the outer wall or on even/even positions.
    pub stray_passages: Vec<PixelCoordinate>,
    pub connected_components: usize,
    pub has_cycle: bool,
}

impl MazeReport {
    pub fn of(maze: &Bitmap) -> MazeReport {
        let size = maze.size();
        let (graph, _) = maze_graph(maze);

        let unvisited_node_cells = size.node_cells().filter(|&c| maze.is_wall(c)).count();
        let stray_passages = maze.iter_passages()
            .filter(|&c| !size.is_interior(c) || (c.x % 2 == 0 && c.y % 2 == 0))
            .collect();

        MazeReport {
            node_cells: graph.node_count(),
            unvisited_node_cells,
            open_connectors: graph.edge_count(),
            stray_passages,
            connected_components: connected_components(&graph),
            has_cycle: is_cyclic_undirected(&graph),
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.problems().is_empty()
    }

    /// Human readable list of everything that keeps the maze from being a
    /// spanning tree over its node cells.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = vec![];
        if self.unvisited_node_cells > 0 {
            problems.push(format!("{} node cells never visited", self.unvisited_node_cells));
        }
        if !self.stray_passages.is_empty() {
            problems.push(format!("{} passages outside the node grid",
                                  self.stray_passages.len()));
        }
        if self.connected_components != 1 {
            problems.push(format!("{} disconnected regions", self.connected_components));
        }
        if self.has_cycle {
            problems.push(String::from("passages form a cycle"));
        }
        if self.node_cells > 0 && self.open_connectors != self.node_cells - 1 {
            problems.push(format!("{} open connectors for {} node cells",
                                  self.open_connectors,
                                  self.node_cells));
        }
        problems
    }
}

/// Build the passage graph of a maze along with the vertex index of every
/// node cell.
pub fn maze_graph(maze: &Bitmap) -> (MazeGraph, FnvHashMap<PixelCoordinate, NodeIndex>) {
    let size = maze.size();
    let node_count = size.node_count().0;
    let mut graph = MazeGraph::with_capacity(node_count, node_count * 2);
    let mut indices = fnv_hashmap(node_count);

    for coord in size.node_cells() {
        let index = graph.add_node(coord);
        let _ = indices.insert(coord, index);
    }

    // Every connector is looked at once, from the node to its left or above.
    for coord in size.node_cells() {
        for &dir in [PathOffset::RIGHT, PathOffset::DOWN].iter() {
            let neighbour = coord.offset_by(dir);
            if !size.is_interior(neighbour) {
                continue;
            }
            let connector = coord.offset_by(dir.half());
            if maze.is_passage(connector) {
                let _ = graph.add_edge(indices[&coord], indices[&neighbour], connector);
            }
        }
    }

    (graph, indices)
}

/// Flood fill along open passages from the node cell `from`.
///
/// Returns every node cell reachable from it, `from` included, or nothing if
/// `from` is not a node cell of the maze.
pub fn reachable_node_cells(maze: &Bitmap, from: PixelCoordinate) -> Vec<PixelCoordinate> {
    let (graph, indices) = maze_graph(maze);
    let start = match indices.get(&from) {
        Some(&index) => index,
        None => return vec![],
    };

    let mut reachable = vec![];
    let mut bfs = Bfs::new(&graph, start);
    while let Some(index) = bfs.next(&graph) {
        reachable.push(graph[index]);
    }
    reachable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze_size::MazeSize;

    fn p(x: u32, y: u32) -> PixelCoordinate {
        PixelCoordinate::new(x, y)
    }

    // 5x5 maze joining (1,1)-(3,1), (1,1)-(1,3) and (3,1)-(3,3)
    fn hand_carved() -> Bitmap {
        let mut b = Bitmap::walled(MazeSize::square(5).unwrap());
        for &c in [p(1, 1), p(3, 1), p(1, 3), p(3, 3), p(2, 1), p(1, 2), p(3, 2)].iter() {
            b.open(c);
        }
        b
    }

    #[test]
    fn hand_carved_maze_is_perfect() {
        let report = MazeReport::of(&hand_carved());
        assert_eq!(report.node_cells, 4);
        assert_eq!(report.open_connectors, 3);
        assert_eq!(report.connected_components, 1);
        assert!(!report.has_cycle);
        assert!(report.is_perfect(), "{:?}", report.problems());
    }

    #[test]
    fn cycle_is_detected() {
        let mut b = hand_carved();
        b.open(p(2, 3));
        let report = MazeReport::of(&b);
        assert!(report.has_cycle);
        assert_eq!(report.open_connectors, 4);
        assert!(!report.is_perfect());
    }

    #[test]
    fn disconnected_regions_are_detected() {
        let mut b = hand_carved();
        b.set(p(3, 2), crate::bitmap::Pixel::Wall);
        let report = MazeReport::of(&b);
        assert_eq!(report.connected_components, 2);
        assert!(!report.is_perfect());
        assert_eq!(reachable_node_cells(&b, p(3, 3)), vec![p(3, 3)]);
    }

    #[test]
    fn unvisited_and_stray_pixels_are_reported() {
        let mut b = hand_carved();
        b.set(p(3, 3), crate::bitmap::Pixel::Wall);
        b.open(p(0, 1));
        b.open(p(2, 2));
        let report = MazeReport::of(&b);
        assert_eq!(report.unvisited_node_cells, 1);
        assert_eq!(report.stray_passages, vec![p(0, 1), p(2, 2)]);
        assert_eq!(report.connected_components, 1);
        assert_eq!(report.problems().len(), 2);
    }

    #[test]
    fn flood_fill_from_non_node_cell_is_empty() {
        let b = hand_carved();
        assert!(reachable_node_cells(&b, p(2, 1)).is_empty());
        assert!(reachable_node_cells(&b, p(9, 9)).is_empty());
        assert_eq!(reachable_node_cells(&b, p(3, 3)).len(), 4);
    }
}

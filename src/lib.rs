//! # maze_pathfinding
//!
//! Resumable pathfinding on a grid maze. Two searches are provided,
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with a squared Euclidean
//! heuristic. Instead of running to completion, each search is a state machine that
//! executes a bounded number of expansion rounds per call and keeps its frontier
//! between calls, which makes it suitable for incremental visualization.
//!
//! ```
//! use grid_util::Point;
//! use maze_pathfinding::{Connectivity, Maze, BfsSolver, SearchOutcome, StepSolver};
//!
//! let maze: Maze = "...\n.#.\n...".parse().unwrap();
//! let mut solver = BfsSolver::new(Connectivity::Four);
//! solver.prepare(&maze, Point::new(0, 0), Point::new(2, 2)).unwrap();
//! while solver.step_n(&maze, 2) == SearchOutcome::InProgress {}
//! assert_eq!(solver.path().len(), 5);
//! ```
pub mod benchmark;
pub mod components;
pub mod error;
pub mod map_format;
pub mod maze;
pub mod node;
pub mod solver;

pub use components::Components;
pub use error::{MazeError, SearchError};
pub use maze::{Cell, Maze};
pub use solver::astar::AstarSolver;
pub use solver::bfs::BfsSolver;
pub use solver::{SearchOutcome, StepSolver};

use grid_util::Point;
use smallvec::SmallVec;

/// Inline capacity of neighbour lists, enough for a full Moore neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 8;

/// Orthogonal offsets in expansion order: right, down, left, up.
pub const CARDINAL_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Diagonal offsets in expansion order: down-right, down-left, up-right, up-left.
/// Only used with [Connectivity::Eight], after the [CARDINAL_OFFSETS].
pub const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Which neighbours a search considers when expanding a cell. Every move has unit cost,
/// diagonal moves included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Von Neumann neighbourhood (orthogonal moves only).
    Four,
    /// Moore neighbourhood (orthogonal and diagonal moves).
    #[default]
    Eight,
}

impl Connectivity {
    pub fn allows_diagonal(self) -> bool {
        self == Connectivity::Eight
    }

    /// The neighbour offsets in the fixed order in which both searches expand them.
    pub fn offsets(self) -> impl Iterator<Item = (i32, i32)> {
        let cardinal: &'static [(i32, i32)] = &CARDINAL_OFFSETS;
        let diagonal: &'static [(i32, i32)] = if self.allows_diagonal() {
            &DIAGONAL_OFFSETS
        } else {
            &[]
        };
        cardinal.iter().chain(diagonal).copied()
    }

    /// All points adjacent to `point` under this connectivity, in expansion order. Points
    /// may lie outside of any grid.
    pub fn neighborhood_points(self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        self.offsets()
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .collect()
    }

    /// Checks whether a single move from `p1` to `p2` is legal under this connectivity.
    pub fn is_step(self, p1: &Point, p2: &Point) -> bool {
        let dx = (p1.x - p2.x).abs();
        let dy = (p1.y - p2.y).abs();
        match self {
            Connectivity::Four => dx + dy == 1,
            Connectivity::Eight => dx.max(dy) == 1,
        }
    }
}

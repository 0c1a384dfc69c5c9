use fxhash::FxHashSet;
use grid_util::{Point, ValueGrid};
use log::{debug, trace};
use std::collections::VecDeque;

use crate::{
    error::SearchError,
    maze::Maze,
    node::{NodeArena, NO_PARENT},
    solver::{SearchOutcome, StepSolver},
    Connectivity,
};

/// Breadth-first search over unit-cost moves. Cells are marked visited when they are
/// enqueued, so each cell enters the queue at most once and the first path found to the
/// goal has the fewest moves possible under the chosen [Connectivity].
#[derive(Clone, Debug)]
pub struct BfsSolver {
    pub connectivity: Connectivity,
    nodes: NodeArena<()>,
    queue: VecDeque<usize>,
    visited: FxHashSet<Point>,
    current: Option<usize>,
    goal: Option<Point>,
    outcome: SearchOutcome,
    expansions: usize,
    dimensions: (usize, usize),
}

impl Default for BfsSolver {
    fn default() -> BfsSolver {
        BfsSolver::new(Connectivity::default())
    }
}

impl BfsSolver {
    pub fn new(connectivity: Connectivity) -> BfsSolver {
        BfsSolver {
            connectivity,
            nodes: NodeArena::new(),
            queue: VecDeque::new(),
            visited: FxHashSet::default(),
            current: None,
            goal: None,
            outcome: SearchOutcome::Idle,
            expansions: 0,
            dimensions: (0, 0),
        }
    }

    /// Points waiting in the queue, front first.
    pub fn frontier(&self) -> impl Iterator<Item = Point> + '_ {
        self.queue.iter().map(|&ix| self.nodes.get(ix).point)
    }
}

impl StepSolver for BfsSolver {
    fn prepare(&mut self, maze: &Maze, start: Point, goal: Point) -> Result<(), SearchError> {
        self.reset();
        self.dimensions = (maze.width(), maze.height());
        if maze.is_empty() {
            debug!("BFS prepared on an empty maze");
            self.outcome = SearchOutcome::Exhausted;
            return Ok(());
        }
        maze.check_bounds(&start)?;
        maze.check_bounds(&goal)?;
        let root = self.nodes.push(start, NO_PARENT, ());
        self.queue.push_back(root);
        self.visited.insert(start);
        self.goal = Some(goal);
        self.outcome = SearchOutcome::InProgress;
        debug!("BFS prepared from {} to {}", start, goal);
        Ok(())
    }

    fn step(&mut self, maze: &Maze) -> SearchOutcome {
        if self.outcome != SearchOutcome::InProgress {
            return self.outcome;
        }
        debug_assert_eq!(self.dimensions, (maze.width(), maze.height()));
        let (Some(goal), Some(current)) = (self.goal, self.queue.pop_front()) else {
            self.outcome = SearchOutcome::Exhausted;
            return self.outcome;
        };
        self.current = Some(current);
        self.expansions += 1;
        let point = self.nodes.get(current).point;
        trace!("BFS expanding {}", point);

        if point == goal {
            debug!(
                "BFS reached {} after {} expansions",
                goal, self.expansions
            );
            self.outcome = SearchOutcome::Found;
            return self.outcome;
        }
        for neighbor in maze.passable_neighbors(&point, self.connectivity) {
            if self.visited.insert(neighbor) {
                let child = self.nodes.push(neighbor, current, ());
                self.queue.push_back(child);
            }
        }
        if self.queue.is_empty() {
            debug!(
                "BFS exhausted its queue after {} expansions without reaching {}",
                self.expansions, goal
            );
            self.outcome = SearchOutcome::Exhausted;
        }
        self.outcome
    }

    fn reset(&mut self) {
        self.nodes.clear();
        self.queue.clear();
        self.visited.clear();
        self.current = None;
        self.goal = None;
        self.outcome = SearchOutcome::Idle;
        self.expansions = 0;
        self.dimensions = (0, 0);
    }

    fn path(&self) -> Vec<Point> {
        self.current
            .map(|ix| self.nodes.path_to(ix))
            .unwrap_or_default()
    }

    fn outcome(&self) -> SearchOutcome {
        self.outcome
    }

    fn current(&self) -> Option<Point> {
        self.current.map(|ix| self.nodes.get(ix).point)
    }

    fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    fn expansions(&self) -> usize {
        self.expansions
    }

    fn is_visited(&self, point: &Point) -> bool {
        self.visited.contains(point)
    }

    fn visited_len(&self) -> usize {
        self.visited.len()
    }

    fn frontier_len(&self) -> usize {
        self.queue.len()
    }
}

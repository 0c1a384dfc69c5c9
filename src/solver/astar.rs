use fxhash::{FxBuildHasher, FxHashSet};
use grid_util::{Point, ValueGrid};
use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, trace};

use crate::{
    error::SearchError,
    maze::Maze,
    node::{NodeArena, NO_PARENT},
    solver::{SearchOutcome, StepSolver},
    Connectivity,
};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Cost bookkeeping of an A* node, fixed when the node is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cost {
    /// Moves taken from the start.
    pub g: i64,
    /// Heuristic estimate to the goal, see [squared_euclidean].
    pub h: i64,
    pub f: i64,
}

impl Cost {
    pub fn new(g: i64, h: i64) -> Cost {
        Cost { g, h, f: g + h }
    }
}

/// Squared straight-line distance between two points. This overestimates the number of
/// remaining moves as soon as it exceeds one, so the search it guides behaves greedily and
/// does not guarantee shortest paths.
pub fn squared_euclidean(p1: &Point, p2: &Point) -> i64 {
    let dx = (p1.x - p2.x) as i64;
    let dy = (p1.y - p2.y) as i64;
    dx * dx + dy * dy
}

/// Best-first search ranked by `f = g + h` with the [squared_euclidean] heuristic.
///
/// The open list keeps insertion order and every round scans it linearly for the smallest
/// `f`, the first minimum winning ties. A neighbour that is already open is never
/// re-parented, even if the current node offers it a cheaper `g`.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub connectivity: Connectivity,
    nodes: NodeArena<Cost>,
    open: FxIndexMap<Point, usize>,
    closed: FxHashSet<Point>,
    current: Option<usize>,
    goal: Option<Point>,
    outcome: SearchOutcome,
    expansions: usize,
    dimensions: (usize, usize),
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new(Connectivity::default())
    }
}

impl AstarSolver {
    pub fn new(connectivity: Connectivity) -> AstarSolver {
        AstarSolver {
            connectivity,
            nodes: NodeArena::new(),
            open: FxIndexMap::default(),
            closed: FxHashSet::default(),
            current: None,
            goal: None,
            outcome: SearchOutcome::Idle,
            expansions: 0,
            dimensions: (0, 0),
        }
    }

    /// The open list in scan order with the cost of each entry.
    pub fn open_nodes(&self) -> impl Iterator<Item = (Point, Cost)> + '_ {
        self.open
            .iter()
            .map(|(&point, &ix)| (point, self.nodes.get(ix).data))
    }

    /// Cost of the node expanded last.
    pub fn current_cost(&self) -> Option<Cost> {
        self.current.map(|ix| self.nodes.get(ix).data)
    }
}

impl StepSolver for AstarSolver {
    fn prepare(&mut self, maze: &Maze, start: Point, goal: Point) -> Result<(), SearchError> {
        self.reset();
        self.dimensions = (maze.width(), maze.height());
        if maze.is_empty() {
            debug!("A* prepared on an empty maze");
            self.outcome = SearchOutcome::Exhausted;
            return Ok(());
        }
        maze.check_bounds(&start)?;
        maze.check_bounds(&goal)?;
        let root = self
            .nodes
            .push(start, NO_PARENT, Cost::new(0, squared_euclidean(&start, &goal)));
        self.open.insert(start, root);
        self.closed.insert(start);
        self.goal = Some(goal);
        self.outcome = SearchOutcome::InProgress;
        debug!("A* prepared from {} to {}", start, goal);
        Ok(())
    }

    fn step(&mut self, maze: &Maze) -> SearchOutcome {
        if self.outcome != SearchOutcome::InProgress {
            return self.outcome;
        }
        debug_assert_eq!(self.dimensions, (maze.width(), maze.height()));
        let nodes = &self.nodes;
        let cheapest = self
            .open
            .values()
            .position_min_by_key(|&&ix| nodes.get(ix).data.f);
        let (Some(goal), Some((point, current))) = (
            self.goal,
            cheapest.and_then(|pos| self.open.shift_remove_index(pos)),
        ) else {
            self.outcome = SearchOutcome::Exhausted;
            return self.outcome;
        };
        self.closed.insert(point);
        self.current = Some(current);
        self.expansions += 1;
        let g = self.nodes.get(current).data.g;
        trace!("A* expanding {} with g = {}", point, g);

        if point == goal {
            debug!(
                "A* reached {} after {} expansions",
                goal, self.expansions
            );
            self.outcome = SearchOutcome::Found;
            return self.outcome;
        }
        for neighbor in maze.passable_neighbors(&point, self.connectivity) {
            if self.closed.contains(&neighbor) || self.open.contains_key(&neighbor) {
                continue;
            }
            let cost = Cost::new(g + 1, squared_euclidean(&neighbor, &goal));
            let child = self.nodes.push(neighbor, current, cost);
            self.open.insert(neighbor, child);
        }
        if self.open.is_empty() {
            debug!(
                "A* exhausted its open list after {} expansions without reaching {}",
                self.expansions, goal
            );
            self.outcome = SearchOutcome::Exhausted;
        }
        self.outcome
    }

    fn reset(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.closed.clear();
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
        self.closed.contains(point)
    }

    fn visited_len(&self) -> usize {
        self.closed.len()
    }

    fn frontier_len(&self) -> usize {
        self.open.len()
    }
}

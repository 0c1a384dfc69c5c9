use crate::error::SearchError;
use crate::maze::Maze;
use crate::Connectivity;
use grid_util::Point;

pub mod astar;
pub mod bfs;

/// Where a search stands after the last call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// Not prepared since construction or the last reset.
    #[default]
    Idle,
    /// The frontier still holds nodes and the goal has not been reached.
    InProgress,
    /// The goal was expanded; [StepSolver::path] ends at the goal.
    Found,
    /// The frontier ran dry without reaching the goal. [StepSolver::path] ends at the last
    /// expanded node, which is a dead end.
    Exhausted,
}

impl SearchOutcome {
    /// Whether further steps can no longer change the result.
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchOutcome::Found | SearchOutcome::Exhausted)
    }
}

/// A search that advances in bounded rounds and keeps its state between calls. Each round
/// expands a single node. The maze is passed to every call and must not change between
/// [prepare](Self::prepare) and the end of the search.
pub trait StepSolver {
    /// Clears any previous state and primes the search for a path from `start` to `goal`.
    /// The passability of `start` is not checked. On an empty maze the search is
    /// immediately [SearchOutcome::Exhausted].
    fn prepare(&mut self, maze: &Maze, start: Point, goal: Point) -> Result<(), SearchError>;

    /// Runs a single expansion round. Does nothing unless the search is
    /// [SearchOutcome::InProgress].
    fn step(&mut self, maze: &Maze) -> SearchOutcome;

    /// Drops all search state. Calling it repeatedly, or before any
    /// [prepare](Self::prepare), is harmless.
    fn reset(&mut self);

    /// The path from the start to the node expanded last, which is the goal only once the
    /// search is [SearchOutcome::Found]. Empty before the first round.
    fn path(&self) -> Vec<Point>;

    fn outcome(&self) -> SearchOutcome;

    /// The point of the node expanded last.
    fn current(&self) -> Option<Point>;

    fn connectivity(&self) -> Connectivity;

    /// Number of rounds that expanded a node since the last prepare.
    fn expansions(&self) -> usize;

    fn is_visited(&self, point: &Point) -> bool;

    fn visited_len(&self) -> usize;

    fn frontier_len(&self) -> usize;

    /// Runs up to `repeat` rounds, stopping early once the search is no longer in
    /// progress. Stepping `n` and then `m` rounds is the same as stepping `n + m`.
    fn step_n(&mut self, maze: &Maze, repeat: usize) -> SearchOutcome {
        for _ in 0..repeat {
            if self.step(maze) != SearchOutcome::InProgress {
                break;
            }
        }
        self.outcome()
    }

    /// Steps until the goal is found or the frontier is exhausted.
    fn run(&mut self, maze: &Maze) -> SearchOutcome {
        while self.step(maze) == SearchOutcome::InProgress {}
        self.outcome()
    }

    fn is_finished(&self) -> bool {
        self.outcome() == SearchOutcome::Found
    }

    /// Prepares and runs a complete search, returning the path if the goal was reached.
    fn solve(
        &mut self,
        maze: &Maze,
        start: Point,
        goal: Point,
    ) -> Result<Option<Vec<Point>>, SearchError> {
        self.prepare(maze, start, goal)?;
        Ok((self.run(maze) == SearchOutcome::Found).then(|| self.path()))
    }
}

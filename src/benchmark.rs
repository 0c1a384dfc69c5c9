//! Runs both searches to completion on the same query and reports how they compare.
use grid_util::Point;
use log::{info, warn};
use std::time::{Duration, Instant};

use crate::{
    components::Components,
    error::SearchError,
    maze::Maze,
    solver::{astar::AstarSolver, bfs::BfsSolver, SearchOutcome, StepSolver},
    Connectivity,
};

/// The result of running one search to completion.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub algorithm: &'static str,
    pub outcome: SearchOutcome,
    /// Path to the goal if one was found, otherwise the path to the last expanded node.
    pub path: Vec<Point>,
    pub expansions: usize,
    pub visited: usize,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    /// Number of moves of the path, if the goal was reached.
    pub fn path_moves(&self) -> Option<usize> {
        self.found().then(|| self.path.len().saturating_sub(1))
    }
}

/// Runs a prepared-from-scratch search until it ends.
pub fn run_to_completion<S: StepSolver>(
    algorithm: &'static str,
    solver: &mut S,
    maze: &Maze,
    start: Point,
    goal: Point,
) -> Result<RunReport, SearchError> {
    let before = Instant::now();
    solver.prepare(maze, start, goal)?;
    let outcome = solver.run(maze);
    let elapsed = before.elapsed();
    Ok(RunReport {
        algorithm,
        outcome,
        path: solver.path(),
        expansions: solver.expansions(),
        visited: solver.visited_len(),
        elapsed,
    })
}

#[derive(Clone, Debug)]
pub struct Comparison {
    pub bfs: RunReport,
    pub astar: RunReport,
    /// Whether start and goal share a connected component.
    pub reachable: bool,
}

impl Comparison {
    pub fn paths_agree(&self) -> bool {
        self.bfs.outcome == self.astar.outcome && self.bfs.path == self.astar.path
    }

    /// How many more moves the A* path takes than the BFS path. Never negative, since BFS
    /// paths have the fewest moves.
    pub fn length_delta(&self) -> Option<usize> {
        match (self.astar.path_moves(), self.bfs.path_moves()) {
            (Some(a), Some(b)) => Some(a.saturating_sub(b)),
            _ => None,
        }
    }
}

/// Runs [BfsSolver] and [AstarSolver] on the same query without a step limit.
pub fn compare(
    maze: &Maze,
    start: Point,
    goal: Point,
    connectivity: Connectivity,
) -> Result<Comparison, SearchError> {
    let reachable = Components::new(maze, connectivity).reachable(&start, &goal);
    let bfs = run_to_completion(
        "BFS",
        &mut BfsSolver::new(connectivity),
        maze,
        start,
        goal,
    )?;
    let astar = run_to_completion(
        "A*",
        &mut AstarSolver::new(connectivity),
        maze,
        start,
        goal,
    )?;
    for report in [&bfs, &astar] {
        info!(
            "{}: {:?} after {} expansions in {:.2?}",
            report.algorithm, report.outcome, report.expansions, report.elapsed
        );
        if reachable && report.outcome == SearchOutcome::Exhausted {
            warn!(
                "{} exhausted its frontier although {} is reachable from {}",
                report.algorithm, goal, start
            );
        }
    }
    Ok(Comparison {
        bfs,
        astar,
        reachable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_open_maze() {
        let maze: Maze = "....\n.##.\n....".parse().unwrap();
        let comparison =
            compare(&maze, Point::new(0, 0), Point::new(3, 2), Connectivity::Four).unwrap();
        assert!(comparison.reachable);
        assert!(comparison.bfs.found());
        assert!(comparison.astar.found());
        assert_eq!(comparison.bfs.path_moves(), Some(5));
        assert_eq!(comparison.length_delta(), Some(0));
    }

    #[test]
    fn compare_blocked_maze() {
        let maze: Maze = "..#..\n..#..".parse().unwrap();
        let comparison =
            compare(&maze, Point::new(0, 0), Point::new(4, 1), Connectivity::Eight).unwrap();
        assert!(!comparison.reachable);
        assert_eq!(comparison.bfs.outcome, SearchOutcome::Exhausted);
        assert_eq!(comparison.astar.outcome, SearchOutcome::Exhausted);
        assert_eq!(comparison.length_delta(), None);
        assert_eq!(comparison.bfs.visited, 4);
    }

    #[test]
    fn compare_rejects_out_of_bounds() {
        let maze: Maze = "..".parse().unwrap();
        assert!(compare(&maze, Point::new(0, 0), Point::new(0, 1), Connectivity::Four).is_err());
    }
}

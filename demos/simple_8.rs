use grid_util::point::Point;
use maze_pathfinding::{BfsSolver, Connectivity, Maze, StepSolver};

// In this example a path is found on a 3x3 maze with shape
//  ___
// |S  |
// | # |
// |  G|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Nodes have an 8-neighborhood

fn main() {
    let maze: Maze = "S..\n.#.\n..G".parse().unwrap();
    println!("{}", maze);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let mut solver = BfsSolver::new(Connectivity::Eight);
    let path = solver.solve(&maze, start, end).unwrap().unwrap();
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
}

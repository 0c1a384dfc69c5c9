use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use maze_pathfinding::{AstarSolver, Cell, Connectivity, Maze, SearchOutcome, StepSolver};
use rand::prelude::*;
use std::collections::HashSet;

// Steps an A* search a few rounds at a time and prints the partial path after every batch,
// the way an interactive viewer would redraw it each frame. Legend:
// - # obstacle
// - o visited cell
// - * current partial path

const N: usize = 24;
const STEPS_PER_FRAME: usize = 12;

fn draw(maze: &Maze, solver: &AstarSolver) {
    let path: HashSet<Point> = solver.path().into_iter().collect();
    for y in 0..maze.height() as i32 {
        let row = (0..maze.width() as i32)
            .map(|x| {
                let p = Point::new(x, y);
                if path.contains(&p) {
                    '*'
                } else if maze.get(x, y) {
                    '#'
                } else if solver.is_visited(&p) {
                    'o'
                } else {
                    '.'
                }
            })
            .collect::<String>();
        println!("{}", row);
    }
}

fn main() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut maze = Maze::with_size(N, N, Cell::Passable);
    for x in 0..N as i32 {
        for y in 0..N as i32 {
            maze.set(x, y, rng.gen_bool(0.3));
        }
    }
    let start = Point::new(0, 0);
    let goal = Point::new(N as i32 - 1, N as i32 - 1);
    maze.set_point(start, false);
    maze.set_point(goal, false);

    let mut solver = AstarSolver::new(Connectivity::Eight);
    solver.prepare(&maze, start, goal).unwrap();
    let mut frame = 0;
    loop {
        let outcome = solver.step_n(&maze, STEPS_PER_FRAME);
        frame += 1;
        println!(
            "Frame {}: {:?}, {} expansions, {} open",
            frame,
            outcome,
            solver.expansions(),
            solver.frontier_len()
        );
        draw(&maze, &solver);
        println!();
        if outcome != SearchOutcome::InProgress {
            break;
        }
    }
    match solver.outcome() {
        SearchOutcome::Found => println!("Reached {} in {} moves", goal, solver.path().len() - 1),
        _ => println!("{} cannot be reached from {}", goal, start),
    }
}

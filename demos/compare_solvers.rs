use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use maze_pathfinding::benchmark::compare;
use maze_pathfinding::{Cell, Connectivity, Maze};
use rand::prelude::*;
use std::time::Duration;

// Runs BFS and A* to completion on a series of random mazes and reports how their run times
// and path lengths differ.

const N: usize = 100;
const N_MAZES: usize = 50;

fn main() {
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let goal = Point::new(N as i32 - 1, N as i32 - 1);
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        let mut bfs_time = Duration::ZERO;
        let mut astar_time = Duration::ZERO;
        let mut disagreements = 0;
        let mut extra_moves = 0;
        for _ in 0..N_MAZES {
            let mut maze = Maze::with_size(N, N, Cell::Passable);
            for x in 0..N as i32 {
                for y in 0..N as i32 {
                    maze.set(x, y, rng.gen_bool(0.25));
                }
            }
            maze.set_point(start, false);
            maze.set_point(goal, false);
            let comparison = compare(&maze, start, goal, connectivity).unwrap();
            bfs_time += comparison.bfs.elapsed;
            astar_time += comparison.astar.elapsed;
            if !comparison.paths_agree() {
                disagreements += 1;
            }
            extra_moves += comparison.length_delta().unwrap_or(0);
        }
        println!("{:?}-connected, {} mazes of {}x{}", connectivity, N_MAZES, N, N);
        println!("\tBFS total time: {:.2?}", bfs_time);
        println!("\tA* total time: {:.2?}", astar_time);
        println!("\tDiffering paths: {}", disagreements);
        println!("\tExtra A* moves: {}", extra_moves);
    }
}

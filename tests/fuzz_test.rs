/// Fuzzes both searches on many small random mazes. BFS path lengths are checked against a
/// brute-force distance computation, path existence against the connected components, and
/// both searches are checked to be resumable.
use grid_util::*;
use itertools::Itertools;
use maze_pathfinding::{
    AstarSolver, BfsSolver, Cell, Components, Connectivity, Maze, SearchOutcome, StepSolver,
};
use rand::prelude::*;

fn random_maze(w: usize, h: usize, rng: &mut StdRng, density: f64) -> Maze {
    let mut maze = Maze::with_size(w, h, Cell::Passable);
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            maze.set(x, y, rng.gen_bool(density))
        }
    }
    maze
}

fn visualize_maze(maze: &Maze, start: &Point, end: &Point) {
    for y in 0..maze.height() as i32 {
        for x in 0..maze.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if maze.get(x, y) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

/// Fewest unit-cost moves from start to goal, found by relaxing every cell until nothing
/// changes. Deliberately shares no code with the searches.
fn brute_force_moves(
    maze: &Maze,
    start: &Point,
    goal: &Point,
    connectivity: Connectivity,
) -> Option<usize> {
    let (w, h) = (maze.width() as i32, maze.height() as i32);
    let ix = |p: &Point| (p.y * w + p.x) as usize;
    let mut dist = vec![usize::MAX; (w * h) as usize];
    dist[ix(start)] = 0;
    let mut changed = true;
    while changed {
        changed = false;
        for (x, y) in (0..w).cartesian_product(0..h) {
            let p = Point::new(x, y);
            if maze.get(x, y) {
                continue;
            }
            for (nx, ny) in (x - 1..=x + 1).cartesian_product(y - 1..=y + 1) {
                let n = Point::new(nx, ny);
                if nx < 0 || ny < 0 || nx >= w || ny >= h || !connectivity.is_step(&p, &n) {
                    continue;
                }
                let via = dist[ix(&n)].saturating_add(1);
                if via < dist[ix(&p)] {
                    dist[ix(&p)] = via;
                    changed = true;
                }
            }
        }
    }
    let d = dist[ix(goal)];
    (d != usize::MAX).then_some(d)
}

fn assert_valid_path(maze: &Maze, path: &[Point], connectivity: Connectivity) {
    assert!(path.iter().all(|p| maze.is_passable(p)));
    for (a, b) in path.iter().tuple_windows() {
        assert!(connectivity.is_step(a, b), "illegal move {a} -> {b}");
    }
}

/// Steps one round at a time and records every expanded point.
fn expanded_points<S: StepSolver>(solver: &mut S, maze: &Maze) -> Vec<Point> {
    let mut expanded = Vec::new();
    while solver.outcome() == SearchOutcome::InProgress {
        let before = solver.expansions();
        solver.step(maze);
        if solver.expansions() > before {
            expanded.extend(solver.current());
        }
    }
    expanded
}

fn assert_resumable<S: StepSolver + Clone>(
    solver: &S,
    maze: &Maze,
    start: Point,
    end: Point,
    rng: &mut StdRng,
) {
    let n = rng.gen_range(0..20);
    let m = rng.gen_range(0..20);
    let mut split = solver.clone();
    let mut whole = solver.clone();
    split.prepare(maze, start, end).unwrap();
    whole.prepare(maze, start, end).unwrap();
    split.step_n(maze, n);
    split.step_n(maze, m);
    whole.step_n(maze, n + m);
    assert_eq!(split.outcome(), whole.outcome());
    assert_eq!(split.path(), whole.path());
    assert_eq!(split.expansions(), whole.expansions());
    assert_eq!(split.visited_len(), whole.visited_len());
    assert_eq!(split.frontier_len(), whole.frontier_len());
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_MAZES: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        let start = Point::new(0, 0);
        let end = Point::new(N as i32 - 1, N as i32 - 1);
        for _ in 0..N_MAZES {
            let mut maze = random_maze(N, N, &mut rng, 0.4);
            maze.set_point(start, false);
            maze.set_point(end, false);
            let reachable = Components::new(&maze, connectivity).reachable(&start, &end);
            let bfs_path = BfsSolver::new(connectivity).solve(&maze, start, end).unwrap();
            let astar_path = AstarSolver::new(connectivity)
                .solve(&maze, start, end)
                .unwrap();
            // Show the maze if a path is not found
            if bfs_path.is_some() != reachable || astar_path.is_some() != reachable {
                visualize_maze(&maze, &start, &end);
            }
            assert_eq!(bfs_path.is_some(), reachable);
            assert_eq!(astar_path.is_some(), reachable);
            for path in bfs_path.iter().chain(astar_path.iter()) {
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));
                assert_valid_path(&maze, path, connectivity);
            }
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 5;
    const N_MAZES: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        for _ in 0..N_MAZES {
            let maze = random_maze(N, N, &mut rng, 0.3);
            let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
            let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
            if !maze.is_passable(&start) || !maze.is_passable(&end) {
                continue;
            }
            let expected = brute_force_moves(&maze, &start, &end, connectivity);
            let mut bfs = BfsSolver::new(connectivity);
            let bfs_path = bfs.solve(&maze, start, end).unwrap();
            let bfs_moves = bfs_path.as_ref().map(|p| p.len() - 1);
            if bfs_moves != expected {
                visualize_maze(&maze, &start, &end);
            }
            assert_eq!(bfs_moves, expected);

            // A* is not guaranteed to be optimal, but can never beat BFS.
            let astar_path = AstarSolver::new(connectivity)
                .solve(&maze, start, end)
                .unwrap();
            let astar_moves = astar_path.as_ref().map(|p| p.len() - 1);
            assert_eq!(astar_moves.is_some(), expected.is_some());
            if let (Some(a), Some(b)) = (astar_moves, expected) {
                assert!(a >= b);
            }

            // Determinism
            assert_eq!(bfs.solve(&maze, start, end).unwrap(), bfs_path);
        }
    }
}

#[test]
fn fuzz_resumable() {
    const N: usize = 8;
    const N_MAZES: usize = 500;
    let mut rng = StdRng::seed_from_u64(2);
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        let start = Point::new(0, 0);
        let end = Point::new(N as i32 - 1, N as i32 - 1);
        for _ in 0..N_MAZES {
            let mut maze = random_maze(N, N, &mut rng, 0.3);
            maze.set_point(start, false);
            assert_resumable(&BfsSolver::new(connectivity), &maze, start, end, &mut rng);
            assert_resumable(&AstarSolver::new(connectivity), &maze, start, end, &mut rng);
        }
    }
}

#[test]
fn fuzz_no_duplicate_expansion() {
    const N: usize = 8;
    const N_MAZES: usize = 500;
    let mut rng = StdRng::seed_from_u64(3);
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        let start = Point::new(0, 0);
        let end = Point::new(N as i32 - 1, N as i32 - 1);
        for _ in 0..N_MAZES {
            let mut maze = random_maze(N, N, &mut rng, 0.3);
            maze.set_point(start, false);

            let mut bfs = BfsSolver::new(connectivity);
            bfs.prepare(&maze, start, end).unwrap();
            let expanded = expanded_points(&mut bfs, &maze);
            assert_eq!(expanded.iter().unique().count(), expanded.len());
            assert!(expanded.len() <= bfs.visited_len());

            let mut astar = AstarSolver::new(connectivity);
            astar.prepare(&maze, start, end).unwrap();
            let expanded = expanded_points(&mut astar, &maze);
            assert_eq!(expanded.iter().unique().count(), expanded.len());
            assert_eq!(expanded.len(), astar.visited_len());
            assert!(astar.outcome().is_terminal());
        }
    }
}

/// Once a point is on the open list, its cost never changes, even if a cheaper route to it
/// is found later.
#[test]
fn fuzz_astar_costs_are_fixed() {
    const N: usize = 8;
    const N_MAZES: usize = 300;
    let mut rng = StdRng::seed_from_u64(4);
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        for _ in 0..N_MAZES {
            let maze = random_maze(N, N, &mut rng, 0.25);
            let start = Point::new(rng.gen_range(0..N as i32), 0);
            let end = Point::new(rng.gen_range(0..N as i32), N as i32 - 1);
            let mut astar = AstarSolver::new(connectivity);
            astar.prepare(&maze, start, end).unwrap();
            let mut seen = std::collections::HashMap::new();
            while astar.step(&maze) == SearchOutcome::InProgress {
                for (point, cost) in astar.open_nodes() {
                    assert_eq!(*seen.entry(point).or_insert(cost), cost);
                    assert_eq!(cost.f, cost.g + cost.h);
                }
            }
        }
    }
}

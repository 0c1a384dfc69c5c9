use grid_util::{Point, ValueGrid};
use log::info;
use petgraph::unionfind::UnionFind;

use crate::{maze::Maze, Connectivity};

/// Connected components of the passable cells of a [Maze], maintained in a [UnionFind]
/// structure. Answers whether any path exists between two cells without running a search.
#[derive(Clone, Debug)]
pub struct Components {
    pub components: UnionFind<usize>,
    pub connectivity: Connectivity,
    width: usize,
    height: usize,
}

impl Components {
    /// Links every passable cell with its passable neighbours under `connectivity`.
    pub fn new(maze: &Maze, connectivity: Connectivity) -> Components {
        info!(
            "Generating connected components of a {}x{} maze",
            maze.width(),
            maze.height()
        );
        let mut components = UnionFind::new(maze.width() * maze.height());
        for y in 0..maze.height() as i32 {
            for x in 0..maze.width() as i32 {
                let point = Point::new(x, y);
                if !maze.is_passable(&point) {
                    continue;
                }
                let parent_ix = maze.ix(&point);
                // Linking forwards is enough, the other half is covered from the other side.
                let forward: &[(i32, i32)] = if connectivity.allows_diagonal() {
                    &[(1, 0), (0, 1), (1, 1), (1, -1)]
                } else {
                    &[(1, 0), (0, 1)]
                };
                for (dx, dy) in forward {
                    let n = Point::new(x + dx, y + dy);
                    if maze.is_passable(&n) {
                        components.union(parent_ix, maze.ix(&n));
                    }
                }
            }
        }
        Components {
            components,
            connectivity,
            width: maze.width(),
            height: maze.height(),
        }
    }

    fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    fn ix(&self, point: &Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.in_bounds(point)
            .then(|| self.components.find(self.ix(point)))
    }

    /// Checks if start and goal are on the same component. Blocked cells form singleton
    /// components, so a blocked goal is only reachable from itself.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start) && self.in_bounds(goal) {
            self.components.equiv(self.ix(start), self.ix(goal))
        } else {
            false
        }
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }
}

use crate::error::{MazeError, SearchError};
use crate::{Connectivity, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use smallvec::SmallVec;

/// Traversability of a single maze cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Passable,
    Blocked,
}

impl Cell {
    pub fn is_blocked(self) -> bool {
        self == Cell::Blocked
    }
    pub fn is_passable(self) -> bool {
        self == Cell::Passable
    }
}

impl From<bool> for Cell {
    /// Maps `true` to [Cell::Blocked], matching the [BoolGrid] convention.
    fn from(blocked: bool) -> Cell {
        if blocked {
            Cell::Blocked
        } else {
            Cell::Passable
        }
    }
}

/// [Maze] is a rectangular grid of [Cell]s stored as a [BoolGrid] in which occupied spaces
/// are [true]. Searches only read from it; changing the maze requires re-preparing any
/// search running on it.
#[derive(Clone, Debug)]
pub struct Maze {
    pub grid: BoolGrid,
}

impl Default for Maze {
    fn default() -> Maze {
        Maze {
            grid: BoolGrid::new(0, 0, false),
        }
    }
}

impl Maze {
    /// Creates a maze of the given size where every cell is `cell`.
    pub fn with_size(width: usize, height: usize, cell: Cell) -> Maze {
        Maze {
            grid: BoolGrid::new(width, height, cell.is_blocked()),
        }
    }

    /// Builds a maze from rows of cells, the first row being `y = 0`. All rows must have
    /// the same length.
    pub fn from_rows<R>(rows: &[R]) -> Result<Maze, MazeError>
    where
        R: AsRef<[Cell]>,
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if let Some((row, found)) = rows
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(MazeError::Jagged {
                row,
                expected: width,
                found,
            });
        }
        let mut maze = Maze::with_size(width, height, Cell::Passable);
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.as_ref().iter().enumerate() {
                if cell.is_blocked() {
                    maze.grid.set(x as i32, y as i32, true);
                }
            }
        }
        Ok(maze)
    }

    /// A maze without any cells. Searches on it end immediately.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width()
            && (point.y as usize) < self.height()
    }

    pub fn check_bounds(&self, point: &Point) -> Result<(), SearchError> {
        if self.in_bounds(point) {
            Ok(())
        } else {
            Err(SearchError::OutOfBounds {
                point: *point,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// The cell at `point`, or [None] outside the maze.
    pub fn cell(&self, point: &Point) -> Option<Cell> {
        self.in_bounds(point)
            .then(|| Cell::from(self.grid.get(point.x, point.y)))
    }

    pub fn set_cell(&mut self, point: &Point, cell: Cell) {
        debug_assert!(self.in_bounds(point));
        self.grid.set(point.x, point.y, cell.is_blocked());
    }

    /// In bounds and not blocked.
    pub fn is_passable(&self, point: &Point) -> bool {
        self.cell(point).is_some_and(Cell::is_passable)
    }

    /// Row-major index of an in-bounds point.
    pub fn ix(&self, point: &Point) -> usize {
        debug_assert!(self.in_bounds(point));
        point.y as usize * self.width() + point.x as usize
    }

    /// The neighbours of `point` that can be moved to, in expansion order.
    pub fn passable_neighbors(
        &self,
        point: &Point,
        connectivity: Connectivity,
    ) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        connectivity
            .neighborhood_points(point)
            .into_iter()
            .filter(|p| self.is_passable(p))
            .collect()
    }

    /// Number of passable cells.
    pub fn passable_count(&self) -> usize {
        (0..self.height() as i32)
            .flat_map(|y| (0..self.width() as i32).map(move |x| Point::new(x, y)))
            .filter(|p| self.is_passable(p))
            .count()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            let row = (0..self.width() as i32)
                .map(|x| if self.grid.get(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl ValueGrid<bool> for Maze {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        Maze {
            grid: BoolGrid::new(width, height, default_value),
        }
    }
    fn get(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}

use grid_util::Point;
use thiserror::Error;

/// Errors returned when priming a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The start or goal lies outside of the maze.
    #[error("{point} lies outside of the {width}x{height} maze")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },
}

/// Errors produced while building or parsing a [Maze](crate::Maze).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A row does not have the same length as the first row.
    #[error("row {row} has length {found}, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {tile:?} at column {column} of row {row}")]
    UnknownTile { tile: char, row: usize, column: usize },
    #[error("malformed map header: {0}")]
    Header(String),
    /// The map body does not match the dimensions announced in its header.
    #[error("map declares {width}x{height} but has {found_width}x{found_height} tiles")]
    Dimensions {
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },
}

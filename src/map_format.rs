//! Text formats for mazes: plain ASCII art (`.` open, `#` wall), which is also what
//! [Maze]'s [Display](core::fmt::Display) produces, and the
//! [Moving AI](https://movingai.com/benchmarks/formats.html) `.map` format.
use std::str::FromStr;

use crate::error::MazeError;
use crate::maze::{Cell, Maze};

/// Maps a tile character to a cell. Start and goal markers count as open ground.
pub fn parse_tile(tile: char) -> Option<Cell> {
    match tile {
        '.' | ' ' | 'S' | 'G' => Some(Cell::Passable),
        '#' | '@' | 'O' | 'T' | 'W' => Some(Cell::Blocked),
        _ => None,
    }
}

fn parse_rows<'a, I>(lines: I) -> Result<Vec<Vec<Cell>>, MazeError>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(row, line)| {
            line.chars()
                .enumerate()
                .map(|(column, tile)| {
                    parse_tile(tile).ok_or(MazeError::UnknownTile { tile, row, column })
                })
                .collect::<Result<Vec<Cell>, MazeError>>()
        })
        .collect()
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parses ASCII art, one line per row. Trailing empty lines are ignored.
    fn from_str(s: &str) -> Result<Maze, MazeError> {
        let mut lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Maze::from_rows(&parse_rows(lines)?)
    }
}

fn header_value(line: Option<&str>, key: &str) -> Result<usize, MazeError> {
    let line = line.ok_or_else(|| MazeError::Header(format!("missing '{key}' line")))?;
    match line.trim().split_once(' ') {
        Some((k, v)) if k == key => v
            .trim()
            .parse::<usize>()
            .map_err(|e| MazeError::Header(format!("bad {key} value {v:?}: {e}"))),
        _ => Err(MazeError::Header(format!(
            "expected '{key} <n>', found {line:?}"
        ))),
    }
}

/// Parses a Moving AI benchmark map:
///
/// ```text
/// type octile
/// height 2
/// width 3
/// map
/// ..@
/// .T.
/// ```
pub fn parse_movingai_map(s: &str) -> Result<Maze, MazeError> {
    let mut lines = s.lines().map(|l| l.trim_end_matches('\r'));
    match lines.next() {
        Some(l) if l.trim_start().starts_with("type") => {}
        other => {
            return Err(MazeError::Header(format!(
                "expected 'type' line, found {other:?}"
            )))
        }
    }
    let height = header_value(lines.next(), "height")?;
    let width = header_value(lines.next(), "width")?;
    if lines.next().map(str::trim) != Some("map") {
        return Err(MazeError::Header("missing 'map' line".to_owned()));
    }
    let body: Vec<&str> = lines.filter(|l| !l.is_empty()).collect();
    let rows = parse_rows(body)?;
    let maze = Maze::from_rows(&rows)?;
    let found_height = rows.len();
    let found_width = rows.first().map_or(0, Vec::len);
    if (found_width, found_height) != (width, height) {
        return Err(MazeError::Dimensions {
            width,
            height,
            found_width,
            found_height,
        });
    }
    Ok(maze)
}

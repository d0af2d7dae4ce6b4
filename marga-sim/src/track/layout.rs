//! Text track layouts.
//!
//! A layout is a rectangle of glyphs, one row per line:
//!
//! | glyph | meaning               |
//! |-------|-----------------------|
//! | `.`   | empty                 |
//! | `#`   | track                 |
//! | `S`   | start/finish (track)  |
//!
//! Row index is the y coordinate, column index the x coordinate.

use marga_map::GridCoord;
use thiserror::Error;

/// The 13x13 loop used when no layout is configured.
pub const BUILTIN_LAYOUT: &str = "\
.............
..S######....
..#..#..#....
..#..####....
..#.....#....
..####..####.
..#..#...#.#.
..########.#.
.....#...#.#.
....########.
....#.....#..
....#######..
.............";

/// Layout parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph {
        glyph: char,
        row: usize,
        column: usize,
    },

    #[error("more than one start cell ({first} and {second})")]
    MultipleStarts { first: GridCoord, second: GridCoord },
}

/// Contents of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Track,
    Start,
}

impl Cell {
    fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Cell::Empty),
            '#' => Some(Cell::Track),
            'S' => Some(Cell::Start),
            _ => None,
        }
    }

    /// Glyph used when drawing the cell.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Track => '#',
            Cell::Start => 'S',
        }
    }

    /// Can the vehicle stand here?
    pub fn is_track(self) -> bool {
        !matches!(self, Cell::Empty)
    }
}

/// Parsed, rectangular track layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackLayout {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    start: Option<GridCoord>,
}

impl TrackLayout {
    /// Parse a layout from text.
    ///
    /// Blank lines are skipped and each row is trimmed, so indented
    /// layouts can be pasted into multi-line TOML strings.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows.first().map(|row| row.chars().count()).ok_or(LayoutError::Empty)?;
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        let mut start = None;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::Ragged {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, glyph) in row.chars().enumerate() {
                let cell = Cell::from_glyph(glyph).ok_or(LayoutError::UnknownGlyph {
                    glyph,
                    row: y,
                    column: x,
                })?;
                if cell == Cell::Start {
                    let here = GridCoord::new(x as i32, y as i32);
                    if let Some(first) = start {
                        return Err(LayoutError::MultipleStarts {
                            first,
                            second: here,
                        });
                    }
                    start = Some(here);
                }
                cells.push(cell);
            }
        }

        Ok(Self {
            cells,
            width,
            height,
            start,
        })
    }

    /// The built-in 13x13 loop.
    pub fn builtin() -> Result<Self, LayoutError> {
        Self::parse(BUILTIN_LAYOUT)
    }

    /// Columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The `S` cell, if the layout has one.
    pub fn start(&self) -> Option<GridCoord> {
        self.start
    }

    /// Cell at `coord`, `None` outside the grid.
    pub fn cell(&self, coord: GridCoord) -> Option<Cell> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        let (x, y) = (coord.x as usize, coord.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    /// Is `coord` inside the grid and on the track?
    pub fn is_track(&self, coord: GridCoord) -> bool {
        self.cell(coord).is_some_and(Cell::is_track)
    }

    /// Number of track cells (including the start).
    pub fn track_len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_track()).count()
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

//! Grid representation: player marks and the 9-cell board

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board
pub const GRID_CELLS: usize = 9;

/// A player's mark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Cross,
    Naught,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::Cross => Mark::Naught,
            Mark::Naught => Mark::Cross,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Naught => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Mark::Cross),
            'O' => Some(Mark::Naught),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Immutable 9-cell board, row-major from the top-left corner.
///
/// Mark counts are computed once at construction; cells never change
/// afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Option<Mark>; GRID_CELLS],
    x_count: u8,
    o_count: u8,
}

impl Grid {
    pub fn new(cells: [Option<Mark>; GRID_CELLS]) -> Self {
        let x_count = cells.iter().filter(|c| **c == Some(Mark::Cross)).count() as u8;
        let o_count = cells.iter().filter(|c| **c == Some(Mark::Naught)).count() as u8;
        Self {
            cells,
            x_count,
            o_count,
        }
    }

    /// The empty grid
    pub fn empty() -> Self {
        Self::new([None; GRID_CELLS])
    }

    pub fn cells(&self) -> &[Option<Mark>; GRID_CELLS] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }

    pub fn count(&self, mark: Mark) -> usize {
        match mark {
            Mark::Cross => self.x_count as usize,
            Mark::Naught => self.o_count as usize,
        }
    }

    pub fn empty_count(&self) -> usize {
        GRID_CELLS - (self.x_count + self.o_count) as usize
    }

    /// New grid with `mark` written at `index` (cell must be validated
    /// empty by the caller)
    pub(crate) fn with_mark_at(&self, index: usize, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[index] = Some(mark);
        Self::new(cells)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parse the canonical 9-character cell string ('X', 'O', space)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidGrid {
            cells: s.to_string(),
        };

        let mut cells = [None; GRID_CELLS];
        let mut chars = s.chars();
        for cell in cells.iter_mut() {
            *cell = match chars.next().ok_or_else(invalid)? {
                ' ' => None,
                c => Some(Mark::from_char(c).ok_or_else(invalid)?),
            };
        }
        if chars.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::new(cells))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(mark) => write!(f, "{}", mark.as_char())?,
                None => write!(f, " ")?,
            }
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_other() {
        assert_eq!(Mark::Cross.other(), Mark::Naught);
        assert_eq!(Mark::Naught.other(), Mark::Cross);
    }

    #[test]
    fn test_empty_grid_counts() {
        let grid = Grid::empty();
        assert_eq!(grid.count(Mark::Cross), 0);
        assert_eq!(grid.count(Mark::Naught), 0);
        assert_eq!(grid.empty_count(), 9);
    }

    #[test]
    fn test_parse_round_trip() {
        let grid: Grid = "XXXOO    ".parse().unwrap();
        assert_eq!(grid.count(Mark::Cross), 3);
        assert_eq!(grid.count(Mark::Naught), 2);
        assert_eq!(grid.empty_count(), 4);
        assert_eq!(grid.to_string(), "XXXOO    ");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("XXXOO".parse::<Grid>().is_err()); // too short
        assert!("XXXOO     ".parse::<Grid>().is_err()); // too long
        assert!("XXXQO    ".parse::<Grid>().is_err()); // bad symbol
    }

    #[test]
    fn test_with_mark_at() {
        let grid = Grid::empty().with_mark_at(4, Mark::Cross);
        assert_eq!(grid.cell(4), Some(Mark::Cross));
        assert_eq!(grid.count(Mark::Cross), 1);
        assert_eq!(grid.empty_count(), 8);
    }
}

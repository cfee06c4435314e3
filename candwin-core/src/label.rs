//! Label character table
//!
//! The candidate window is a fixed grid shaped like a keyboard: every cell is
//! bound to the key that selects it. The table is built once and never
//! changes afterwards.

use tracing::debug;

use crate::error::{CandwinError, Result};

/// Number of grid rows
pub const GRID_ROWS: usize = 8;
/// Number of grid columns
pub const GRID_COLUMNS: usize = 13;
/// Total number of grid cells
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLUMNS;

/// Built-in 106-keyboard layout. `'\0'` marks a cell without a key.
#[rustfmt::skip]
const DEFAULT_LAYOUT: [char; GRID_CELLS] = [
    '1', '2', '3', '4', '5',  '6', '7', '8', '9', '0',   '-', '^', '\\',
    'q', 'w', 'e', 'r', 't',  'y', 'u', 'i', 'o', 'p',   '@', '[', '\0',
    'a', 's', 'd', 'f', 'g',  'h', 'j', 'k', 'l', ';',   ':', ']', '\0',
    'z', 'x', 'c', 'v', 'b',  'n', 'm', ',', '.', '/',   '\0', '\0', ' ',
    '!', '"', '#', '$', '%',  '&', '\'', '(', ')', '\0', '=', '~', '|',
    'Q', 'W', 'E', 'R', 'T',  'Y', 'U', 'I', 'O', 'P',   '`', '{', '\0',
    'A', 'S', 'D', 'F', 'G',  'H', 'J', 'K', 'L', '+',   '*', '}', '\0',
    'Z', 'X', 'C', 'V', 'B',  'N', 'M', '<', '>', '?',   '_', '\0', '\0',
];

/// A cell position on the label grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major offset into a flat cell array
    pub fn offset(self) -> usize {
        self.row * GRID_COLUMNS + self.col
    }

    fn from_offset(offset: usize) -> Self {
        Self {
            row: offset / GRID_COLUMNS,
            col: offset % GRID_COLUMNS,
        }
    }
}

/// Fixed 8x13 table of label characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    cells: [Option<char>; GRID_CELLS],
}

impl LabelTable {
    /// Build a table from row-major labels.
    ///
    /// The whole table is replaced: missing trailing cells stay unbound.
    /// More than [`GRID_CELLS`] labels is an error.
    pub fn from_labels(labels: impl IntoIterator<Item = Option<char>>) -> Result<Self> {
        let labels: Vec<Option<char>> = labels.into_iter().collect();
        if labels.len() > GRID_CELLS {
            return Err(CandwinError::LabelTableOverflow(labels.len()));
        }

        let mut cells = [None; GRID_CELLS];
        for (cell, label) in cells.iter_mut().zip(labels) {
            *cell = label.filter(|&ch| ch != '\0');
        }
        debug!(
            "Built label table with {} bound cells",
            cells.iter().flatten().count()
        );
        Ok(Self { cells })
    }

    /// Build a table from configuration strings: the first character of each
    /// string is the label, an empty string leaves the cell unbound.
    pub fn from_strings<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        Self::from_labels(labels.iter().map(|s| s.as_ref().chars().next()))
    }

    /// Label bound to a cell
    pub fn get(&self, pos: CellPos) -> Option<char> {
        self.cells.get(pos.offset()).copied().flatten()
    }

    /// First cell (row-major) bound to `ch`, if any
    pub fn position(&self, ch: char) -> Option<CellPos> {
        self.cells
            .iter()
            .position(|&cell| cell == Some(ch))
            .map(CellPos::from_offset)
    }

    /// Cell where a candidate labelled `ch` is placed.
    ///
    /// Unknown labels fall back to the top-left cell.
    pub fn lookup(&self, ch: char) -> CellPos {
        self.position(ch).unwrap_or_default()
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, Option<char>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &label)| (CellPos::from_offset(i), label))
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        let mut cells = [None; GRID_CELLS];
        for (cell, &ch) in cells.iter_mut().zip(DEFAULT_LAYOUT.iter()) {
            if ch != '\0' {
                *cell = Some(ch);
            }
        }
        Self { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_corners() {
        let table = LabelTable::default();
        assert_eq!(table.get(CellPos::new(0, 0)), Some('1'));
        assert_eq!(table.get(CellPos::new(0, 12)), Some('\\'));
        assert_eq!(table.get(CellPos::new(3, 12)), Some(' '));
        assert_eq!(table.get(CellPos::new(7, 12)), None);
        assert_eq!(table.get(CellPos::new(4, 9)), None);
    }

    #[test]
    fn test_lookup_known_labels() {
        let table = LabelTable::default();
        assert_eq!(table.lookup('a'), CellPos::new(2, 0));
        assert_eq!(table.lookup(';'), CellPos::new(2, 9));
        assert_eq!(table.lookup('Q'), CellPos::new(5, 0));
        assert_eq!(table.lookup('_'), CellPos::new(7, 10));
        assert_eq!(table.lookup('|'), CellPos::new(4, 12));
    }

    #[test]
    fn test_lookup_unknown_falls_back_to_origin() {
        let table = LabelTable::default();
        assert_eq!(table.position('あ'), None);
        assert_eq!(table.lookup('あ'), CellPos::new(0, 0));
    }

    #[test]
    fn test_lookup_is_left_inverse() {
        let table = LabelTable::default();
        for (pos, label) in table.iter() {
            if let Some(ch) = label {
                let found = table.lookup(ch);
                assert!(found.offset() <= pos.offset());
                assert_eq!(table.get(found), Some(ch));
            }
        }
    }

    #[test]
    fn test_duplicate_labels_resolve_to_first_cell() {
        let table = LabelTable::from_strings(&["a", "b", "a"]).unwrap();
        assert_eq!(table.lookup('a'), CellPos::new(0, 0));
        assert_eq!(table.lookup('b'), CellPos::new(0, 1));
    }

    #[test]
    fn test_custom_table_replaces_everything() {
        let table = LabelTable::from_strings(&["x", "", "yz"]).unwrap();
        assert_eq!(table.get(CellPos::new(0, 0)), Some('x'));
        assert_eq!(table.get(CellPos::new(0, 1)), None);
        assert_eq!(table.get(CellPos::new(0, 2)), Some('y'));
        // Nothing of the default layout survives
        assert_eq!(table.position('1'), None);
        assert_eq!(table.iter().filter(|(_, l)| l.is_some()).count(), 2);
    }

    #[test]
    fn test_overflowing_table_is_rejected() {
        let labels = vec!["k"; GRID_CELLS + 1];
        let err = LabelTable::from_strings(&labels).unwrap_err();
        assert!(matches!(err, CandwinError::LabelTableOverflow(105)));
    }
}

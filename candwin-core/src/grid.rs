//! Page grid occupancy and block visibility
//!
//! The label grid is split into four blocks:
//!
//! ```text
//!   Main  A        rows 0-3
//!   LRS   AS       rows 4-7 (shifted keys)
//!   0-9   10-12    columns
//! ```
//!
//! Only the blocks needed to show every occupied cell are displayed, so a
//! page of ten candidates on the number row does not open a full keyboard.

use std::ops::Range;

use crate::candidate::Page;
use crate::label::{CellPos, GRID_COLUMNS, GRID_ROWS, LabelTable};

/// Last row (exclusive) of the unshifted blocks
const UPPER_ROW_END: usize = 4;
/// First column of the punctuation blocks
const PUNCT_COLUMN_START: usize = 10;

/// One of the four rectangular regions of the label grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Primary keys
    Main,
    /// Punctuation and extra keys
    A,
    /// Shifted primary keys
    Lrs,
    /// Shifted punctuation keys
    As,
}

impl Block {
    pub fn rows(self) -> Range<usize> {
        match self {
            Block::Main | Block::A => 0..UPPER_ROW_END,
            Block::Lrs | Block::As => UPPER_ROW_END..GRID_ROWS,
        }
    }

    pub fn cols(self) -> Range<usize> {
        match self {
            Block::Main | Block::Lrs => 0..PUNCT_COLUMN_START,
            Block::A | Block::As => PUNCT_COLUMN_START..GRID_COLUMNS,
        }
    }
}

/// Content of a single grid cell for the displayed page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cell {
    /// No key is bound to this cell
    #[default]
    Unbound,
    /// A key is bound but no candidate uses it on this page
    Vacant(char),
    /// A candidate is placed here
    Occupied {
        text: String,
        annotation: String,
        /// Global candidate index
        index: usize,
    },
}

impl Cell {
    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied { .. })
    }
}

/// Occupancy of the 8x13 grid for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageGrid {
    cells: Vec<Cell>,
}

impl PageGrid {
    /// A grid with no candidates; bound cells are vacant.
    pub fn empty(labels: &LabelTable) -> Self {
        let cells = labels
            .iter()
            .map(|(_, label)| label.map_or(Cell::Unbound, Cell::Vacant))
            .collect();
        Self { cells }
    }

    /// Place every labelled candidate of `page` on the cell its label maps
    /// to. A later candidate on the same cell replaces the earlier one.
    pub fn from_page(labels: &LabelTable, page: &Page) -> Self {
        let mut grid = Self::empty(labels);
        for (index, candidate) in page.indexed() {
            let Some(label) = candidate.label else {
                continue;
            };
            let pos = labels.lookup(label);
            grid.cells[pos.offset()] = Cell::Occupied {
                text: candidate.text.clone(),
                annotation: candidate.annotation.clone(),
                index,
            };
        }
        grid
    }

    pub fn cell(&self, pos: CellPos) -> &Cell {
        &self.cells[pos.offset()]
    }

    /// Global index of the candidate at `pos`, if any
    pub fn candidate_at(&self, pos: CellPos) -> Option<usize> {
        match self.cells.get(pos.offset())? {
            Cell::Occupied { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (CellPos::new(i / GRID_COLUMNS, i % GRID_COLUMNS), cell))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// A block is empty iff none of its cells holds a candidate
    pub fn is_block_empty(&self, block: Block) -> bool {
        block.rows().all(|row| {
            block
                .cols()
                .all(|col| !self.cell(CellPos::new(row, col)).is_occupied())
        })
    }

    /// Smallest region that still contains every occupied cell
    pub fn visible_region(&self) -> VisibleRegion {
        VisibleRegion::for_blocks(
            !self.is_block_empty(Block::A),
            !self.is_block_empty(Block::Lrs),
            !self.is_block_empty(Block::As),
        )
    }
}

/// Cells with `row >= hide_row` or `col >= hide_col` are hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRegion {
    pub hide_row: usize,
    pub hide_col: usize,
}

impl VisibleRegion {
    /// Whole grid
    pub const FULL: Self = Self {
        hide_row: GRID_ROWS,
        hide_col: GRID_COLUMNS,
    };

    /// Main block only
    pub const MINIMAL: Self = Self {
        hide_row: UPPER_ROW_END,
        hide_col: PUNCT_COLUMN_START,
    };

    /// Decide the region from the occupancy of the optional blocks.
    pub fn for_blocks(block_a: bool, block_lrs: bool, block_as: bool) -> Self {
        if block_as || (block_lrs && block_a) {
            Self::FULL
        } else if block_lrs {
            Self {
                hide_row: GRID_ROWS,
                hide_col: PUNCT_COLUMN_START,
            }
        } else if block_a {
            Self {
                hide_row: UPPER_ROW_END,
                hide_col: GRID_COLUMNS,
            }
        } else {
            Self::MINIMAL
        }
    }

    pub fn is_visible(&self, pos: CellPos) -> bool {
        pos.row < self.hide_row && pos.col < self.hide_col
    }
}

impl Default for VisibleRegion {
    fn default() -> Self {
        Self::MINIMAL
    }
}

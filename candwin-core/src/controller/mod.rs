//! Candidate window controller - session state and the pagination state machine
//!
//! `CandidateWindow` owns the whole session: the decoded pages, the selection,
//! the displayed grid and the window geometry. Operations never talk to a
//! toolkit; they queue [`WindowAction`]s that the caller drains and hands to
//! a [`crate::render::Renderer`].

mod dispatch;
mod display;
mod pagination;
mod store;
mod types;

pub use types::*;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::candidate::Page;
use crate::grid::PageGrid;
use crate::label::LabelTable;
use crate::layout::{DEFAULT_SCREEN, DEFAULT_WIDTH, Point, Size};

/// The candidate window session
#[derive(Debug)]
pub struct CandidateWindow {
    /// Keyboard-shaped label table, fixed for the lifetime of the window
    labels: LabelTable,
    /// Filled pages by page number. A page below `page_count` with no
    /// entry is reserved but not filled yet.
    pages: BTreeMap<usize, Page>,
    /// Never zero
    page_count: usize,
    /// Occupancy of the displayed page
    grid: PageGrid,
    nr_candidates: usize,
    /// Candidates per page (0 = everything on one page)
    display_limit: usize,
    candidate_index: Option<usize>,
    page_index: usize,
    is_active: bool,
    /// Highlight flag of the last `select`
    need_hilite: bool,
    /// Caret position reported by the engine
    anchor: Point,
    /// Popup size last reported by the renderer
    size: Size,
    screen: Size,
    /// Actions queued for the renderer
    actions: Vec<WindowAction>,
}

impl CandidateWindow {
    /// Create a window with the given label table
    pub fn new(labels: LabelTable) -> Self {
        let grid = PageGrid::empty(&labels);
        Self {
            labels,
            pages: BTreeMap::new(),
            page_count: 1,
            grid,
            nr_candidates: 0,
            display_limit: 0,
            candidate_index: None,
            page_index: 0,
            is_active: false,
            need_hilite: false,
            anchor: Point::default(),
            size: Size::new(DEFAULT_WIDTH, 0),
            screen: DEFAULT_SCREEN,
            actions: Vec::new(),
        }
    }

    /// Create with explicit screen bounds
    pub fn with_screen(labels: LabelTable, screen: Size) -> Self {
        Self {
            screen,
            ..Self::new(labels)
        }
    }

    pub fn nr_candidates(&self) -> usize {
        self.nr_candidates
    }

    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    /// Selected candidate, `None` when nothing is selected
    pub fn candidate_index(&self) -> Option<usize> {
        self.candidate_index
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Number of pages, never zero
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Page `page`, `None` when out of range or not filled yet
    pub fn page(&self, page: usize) -> Option<&Page> {
        self.pages.get(&page)
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn need_hilite(&self) -> bool {
        self.need_hilite
    }

    /// Grid of the displayed page
    pub fn grid(&self) -> &PageGrid {
        &self.grid
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn screen(&self) -> Size {
        self.screen
    }

    /// Drain the actions queued since the last call
    pub fn take_actions(&mut self) -> Vec<WindowAction> {
        std::mem::take(&mut self.actions)
    }

    fn push(&mut self, action: WindowAction) {
        self.actions.push(action);
    }
}

impl Default for CandidateWindow {
    fn default() -> Self {
        Self::new(LabelTable::default())
    }
}

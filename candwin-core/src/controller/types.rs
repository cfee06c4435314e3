//! Type definitions for the controller

use std::time::Duration;

use crate::grid::{PageGrid, VisibleRegion};
use crate::layout::Point;

/// Action to be performed by the rendering layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowAction {
    /// Load the cells of page `page` into the grid widgets
    ShowPage { page: usize, grid: PageGrid },
    /// Hide every cell outside the region
    SetVisibleRegion(VisibleRegion),
    /// Update the "index / total" label
    SetLabel(String),
    /// Shrink the window to its minimum size so it refits its content
    Shrink,
    /// Move the popup's top-left corner
    MoveTo(Point),
    /// Show the window
    Show,
    /// Hide the window
    Hide,
    /// Tell the engine the user picked candidate `index`
    ReportIndex(usize),
    /// Drive the caret indicator
    Caret(CaretAction),
}

/// Action for the caret position indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaretAction {
    /// Move the indicator, replacing its text when one is given
    Update {
        position: Point,
        text: Option<String>,
    },
    /// Hide the indicator automatically after the timeout
    SetTimeout(Duration),
    Show,
    Hide,
}

//! Rendering interfaces
//!
//! The controller only produces [`WindowAction`]s. A toolkit front-end
//! implements [`Renderer`] and [`CaretIndicator`] and feeds the actions
//! through [`apply`].

use std::time::Duration;

use crate::controller::{CaretAction, WindowAction};
use crate::grid::{PageGrid, VisibleRegion};
use crate::layout::Point;

/// The candidate window widgets
pub trait Renderer {
    /// Load the cells of a page into the grid
    fn show_page(&mut self, page: usize, grid: &PageGrid);
    fn set_visible_region(&mut self, region: VisibleRegion);
    fn set_label(&mut self, text: &str);
    /// Resize to the minimum so the window refits its content
    fn shrink(&mut self);
    fn move_to(&mut self, position: Point);
    fn show(&mut self);
    fn hide(&mut self);
    /// The user picked a candidate; forward it to the engine
    fn report_index(&mut self, _index: usize) {}
}

/// The caret position overlay
pub trait CaretIndicator {
    fn update(&mut self, position: Point, text: Option<&str>);
    fn set_timeout(&mut self, timeout: Duration);
    fn show(&mut self);
    fn hide(&mut self);
}

/// Apply actions in order
pub fn apply<R, C>(actions: &[WindowAction], renderer: &mut R, caret: &mut C)
where
    R: Renderer + ?Sized,
    C: CaretIndicator + ?Sized,
{
    for action in actions {
        match action {
            WindowAction::ShowPage { page, grid } => renderer.show_page(*page, grid),
            WindowAction::SetVisibleRegion(region) => renderer.set_visible_region(*region),
            WindowAction::SetLabel(text) => renderer.set_label(text),
            WindowAction::Shrink => renderer.shrink(),
            WindowAction::MoveTo(position) => renderer.move_to(*position),
            WindowAction::Show => renderer.show(),
            WindowAction::Hide => renderer.hide(),
            WindowAction::ReportIndex(index) => renderer.report_index(*index),
            WindowAction::Caret(caret_action) => match caret_action {
                CaretAction::Update { position, text } => caret.update(*position, text.as_deref()),
                CaretAction::SetTimeout(timeout) => caret.set_timeout(*timeout),
                CaretAction::Show => caret.show(),
                CaretAction::Hide => caret.hide(),
            },
        }
    }
}

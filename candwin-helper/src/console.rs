//! Headless front-end
//!
//! Logs what a graphical candidate window would draw and writes candidate
//! picks back to the engine.

use std::io::Write;
use std::time::Duration;

use candwin_core::layout::{DEFAULT_WIDTH, Point, SHRINK_HEIGHT};
use candwin_core::render::{CaretIndicator, Renderer};
use candwin_core::{Cell, PageGrid, VisibleRegion};
use tracing::{debug, info, warn};

/// Renderer that traces window updates and reports picks to `out`
pub struct ConsoleRenderer<W: Write> {
    out: W,
    region: VisibleRegion,
    visible: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            region: VisibleRegion::default(),
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn region(&self) -> VisibleRegion {
        self.region
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_index(&mut self, index: usize) -> std::io::Result<()> {
        write!(self.out, "index\n{}\n\n", index)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn show_page(&mut self, page: usize, grid: &PageGrid) {
        debug!("Page {}: {} candidates", page, grid.occupied_count());
        for (pos, cell) in grid.iter() {
            if let Cell::Occupied {
                text,
                annotation,
                index,
            } = cell
            {
                debug!(
                    "  [{},{}] #{} {} {}",
                    pos.row, pos.col, index, text, annotation
                );
            }
        }
    }

    fn set_visible_region(&mut self, region: VisibleRegion) {
        self.region = region;
        debug!("Visible region {}x{}", region.hide_row, region.hide_col);
    }

    fn set_label(&mut self, text: &str) {
        debug!("Index label: {}", text);
    }

    fn shrink(&mut self) {
        debug!("Shrinking to {}x{}", DEFAULT_WIDTH, SHRINK_HEIGHT);
    }

    fn move_to(&mut self, position: Point) {
        debug!("Moving to ({}, {})", position.x, position.y);
    }

    fn show(&mut self) {
        self.visible = true;
        info!("Candidate window shown");
    }

    fn hide(&mut self) {
        self.visible = false;
        info!("Candidate window hidden");
    }

    fn report_index(&mut self, index: usize) {
        if let Err(e) = self.write_index(index) {
            warn!("Failed to report index {}: {}", index, e);
        }
    }
}

/// Caret indicator that only traces its state
#[derive(Debug, Default)]
pub struct ConsoleCaret {
    position: Point,
    text: String,
    timeout: Option<Duration>,
    visible: bool,
}

impl ConsoleCaret {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl CaretIndicator for ConsoleCaret {
    fn update(&mut self, position: Point, text: Option<&str>) {
        self.position = position;
        if let Some(text) = text {
            self.text = text.to_string();
        }
        debug!(
            "Caret state at ({}, {}): {}",
            position.x, position.y, self.text
        );
    }

    fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.timeout = None;
    }
}

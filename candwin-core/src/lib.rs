//! candwin-core: the controller behind a table-style candidate window.
//!
//! An input method engine streams commands over a byte stream; this crate
//! frames and parses them, keeps the pagination/selection state, maps
//! candidates onto the keyboard-shaped label grid and tells a renderer what
//! to show. It performs no I/O of its own.

pub mod candidate;
pub mod controller;
pub mod error;
pub mod grid;
pub mod label;
pub mod layout;
pub mod protocol;
pub mod render;

pub use candidate::{Candidate, Charset, Page};
pub use controller::{CandidateWindow, CaretAction, WindowAction};
pub use error::{CandwinError, Result};
pub use grid::{Block, Cell, PageGrid, VisibleRegion};
pub use label::{CellPos, LabelTable};
pub use layout::{Point, Size};
pub use protocol::{Command, FrameReader};
pub use render::{CaretIndicator, Renderer};

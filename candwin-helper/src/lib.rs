//! candwin-helper: the candidate window helper process.
//!
//! Connects a [`candwin_core::CandidateWindow`] to the engine's byte stream
//! and a front-end, and carries the process-level concerns: settings,
//! logging and the transport loop.

pub mod config;
pub mod console;
pub mod logging;
pub mod transport;

pub use config::{EofPolicy, Settings};
pub use console::{ConsoleCaret, ConsoleRenderer};
pub use logging::init_logging;

//! Error types for the candidate window core

use crate::label::GRID_CELLS;

/// Errors surfaced while building controller inputs.
///
/// Protocol handling itself never fails: malformed commands fall back to
/// defaults and are applied anyway.
#[derive(Debug, thiserror::Error)]
pub enum CandwinError {
    #[error("label table has {0} cells, at most {GRID_CELLS} are allowed")]
    LabelTableOverflow(usize),

    #[error("unknown charset: '{0}'")]
    UnknownCharset(String),
}

pub type Result<T> = std::result::Result<T, CandwinError>;

pub mod settings;

pub use settings::{EofPolicy, Settings};

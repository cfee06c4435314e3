//! Wire protocol between the input method engine and the candidate window
//!
//! Messages are separated by two form feeds, fields within a message by one.

mod command;
mod frame;

pub use command::Command;
pub use frame::FrameReader;

/// Byte separating fields within a frame
pub const FIELD_SEPARATOR: u8 = b'\x0c';

/// Byte sequence terminating a frame
pub const FRAME_SEPARATOR: &[u8] = b"\x0c\x0c";

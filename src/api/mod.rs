//! API Module - operator-facing surface
//!
//! - `commands` - command parsing and form edits
//! - `render` - text views
//! - `session` - command dispatch and the interactive loop

pub mod commands;
pub mod render;
pub mod session;

pub use commands::Command;
pub use session::{Reply, Session};

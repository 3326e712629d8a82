//! Interactive chat module
//!
//! Provides a line-editor based interactive chat interface.

mod command;
mod repl;

pub use command::{Command, InputLine};
pub use repl::ChatRepl;

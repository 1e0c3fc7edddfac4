//! Headless command-line driver for a help editing session.
//!
//! - `command`: parsing of input lines into commands
//! - `runner`: the read-eval loop and result reporting

mod command;
mod runner;

pub use command::*;
pub use runner::*;

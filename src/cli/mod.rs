//! Command line shell: command word resolution and the run loop

pub mod command;
pub mod orchestration;

pub use command::Request;
pub use orchestration::{run, RunArgs, RunOutcome};

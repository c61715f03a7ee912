//! External process execution.
//!
//! Delegated commands run through a [`ProcessRunner`] so the dispatcher
//! can be exercised in tests without spawning anything.

pub mod command;
pub mod mock;

pub use command::{ProcessExit, ProcessRunner, ProcessSpec, SystemRunner};
pub use mock::MockRunner;

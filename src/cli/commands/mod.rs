//! CLI command implementations.
//!
//! Each table action implements the [`Command`] trait, which provides a
//! uniform interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which resolves a
//! name against the command table and runs its plan. This allows:
//! - One binary with a flat verb table (`devrun test`, `devrun clean`)
//! - Composite commands that reuse other entries (`quick-start`)
//! - Consistent global flag handling

pub mod clean;
pub mod delegate;
pub mod dispatcher;
pub mod help;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

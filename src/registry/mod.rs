//! The command table and execution planning.
//!
//! The table is static for the life of the process. [`plan`] turns a
//! command name into the ordered list of entries to run, so composite
//! commands such as `quick-start` execute their dependencies first.

pub mod plan;
pub mod table;

pub use plan::{plan, plan_in};
pub use table::{entries, lookup, lookup_in, Action, CommandEntry, COMMANDS, DEFAULT_COMMAND};

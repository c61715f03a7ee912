//! Execution planning for composite commands.

use std::collections::HashMap;

use crate::error::{DevrunError, Result};

use super::table::{lookup_in, CommandEntry, COMMANDS};

/// Ordered list of commands to run, dependencies first.
pub fn plan(name: &str) -> Result<Vec<&'static CommandEntry>> {
    plan_in(COMMANDS, name)
}

/// Build an execution plan against an arbitrary table.
///
/// Dependencies are flattened depth-first in declared order and the named
/// command comes last. A command reached more than once runs once.
pub fn plan_in<'a>(table: &'a [CommandEntry], name: &str) -> Result<Vec<&'a CommandEntry>> {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Visiting,
        Visited,
    }

    fn visit<'a>(
        table: &'a [CommandEntry],
        name: &str,
        state: &mut HashMap<&'a str, State>,
        path: &mut Vec<&'a str>,
        order: &mut Vec<&'a CommandEntry>,
    ) -> Result<()> {
        let entry = lookup_in(table, name).ok_or_else(|| DevrunError::UnknownCommand {
            name: name.to_string(),
        })?;

        match state.get(entry.name) {
            Some(State::Visited) => return Ok(()),
            Some(State::Visiting) => {
                let start = path.iter().position(|n| *n == entry.name).unwrap_or(0);
                let mut cycle: Vec<&str> = path[start..].to_vec();
                cycle.push(entry.name);
                return Err(DevrunError::CircularDependency {
                    cycle: cycle.join(" -> "),
                });
            }
            None => {}
        }

        state.insert(entry.name, State::Visiting);
        path.push(entry.name);

        for dep in entry.dependencies {
            visit(table, dep, state, path, order)?;
        }

        path.pop();
        state.insert(entry.name, State::Visited);
        order.push(entry);
        Ok(())
    }

    let mut state = HashMap::new();
    let mut path = Vec::new();
    let mut order = Vec::new();
    visit(table, name, &mut state, &mut path, &mut order)?;
    Ok(order)
}

//! Mock process runner for testing.
//!
//! `MockRunner` records every [`ProcessSpec`] it is asked to run and
//! answers with scripted exit codes. Clones share the same call log, so a
//! test can hand one clone to the dispatcher and inspect the other.
//!
//! # Example
//!
//! ```
//! use devrun::shell::{MockRunner, ProcessRunner, ProcessSpec};
//!
//! let runner = MockRunner::new().with_exit("setup", 1);
//! let exit = runner
//!     .run(&ProcessSpec::new("python").arg("dev.py").arg("setup"))
//!     .unwrap();
//!
//! assert_eq!(exit.code, 1);
//! assert_eq!(runner.invoked_words(), vec!["setup"]);
//! ```

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::error::{DevrunError, Result};

use super::{ProcessExit, ProcessRunner, ProcessSpec};

/// Process runner that records calls instead of spawning.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    exits: Vec<(String, i32)>,
    unspawnable: HashSet<String>,
    calls: Rc<RefCell<Vec<ProcessSpec>>>,
}

impl MockRunner {
    /// Create a runner where every process exits 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the exit code for invocations whose program or any argument
    /// equals `word`.
    ///
    /// When several scripted words match one invocation, the one registered
    /// last wins.
    pub fn with_exit(mut self, word: &str, code: i32) -> Self {
        self.exits.push((word.to_string(), code));
        self
    }

    /// Make invocations of `program` fail to start.
    pub fn with_spawn_failure(mut self, program: &str) -> Self {
        self.unspawnable.insert(program.to_string());
        self
    }

    /// All recorded invocations, in order.
    pub fn calls(&self) -> Vec<ProcessSpec> {
        self.calls.borrow().clone()
    }

    /// The last argument of each recorded invocation.
    ///
    /// For delegated commands this is the verb passed to the script.
    pub fn invoked_words(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|spec| spec.args.last().cloned())
            .collect()
    }

    /// Whether any invocation carried `word` as its program or an argument.
    pub fn was_invoked(&self, word: &str) -> bool {
        self.calls.borrow().iter().any(|spec| matches(spec, word))
    }
}

fn matches(spec: &ProcessSpec, word: &str) -> bool {
    spec.program == word || spec.args.iter().any(|a| a == word)
}

impl ProcessRunner for MockRunner {
    fn run(&self, spec: &ProcessSpec) -> Result<ProcessExit> {
        self.calls.borrow_mut().push(spec.clone());

        if self.unspawnable.contains(&spec.program) {
            return Err(DevrunError::SpawnFailed {
                program: spec.program.clone(),
                message: "mock spawn failure".to_string(),
            });
        }

        let code = self
            .exits
            .iter()
            .rev()
            .find(|(word, _)| matches(spec, word))
            .map(|(_, code)| *code)
            .unwrap_or(0);

        Ok(ProcessExit::new(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_success() {
        let runner = MockRunner::new();
        let exit = runner.run(&ProcessSpec::new("anything")).unwrap();
        assert!(exit.success());
    }

    #[test]
    fn scripted_exit_matches_argument() {
        let runner = MockRunner::new().with_exit("lint", 2);
        let lint = runner
            .run(&ProcessSpec::new("python").arg("dev.py").arg("lint"))
            .unwrap();
        let test = runner
            .run(&ProcessSpec::new("python").arg("dev.py").arg("test"))
            .unwrap();
        assert_eq!(lint.code, 2);
        assert_eq!(test.code, 0);
    }

    #[test]
    fn last_registered_exit_wins() {
        let runner = MockRunner::new().with_exit("python", 1).with_exit("setup", 2);
        let setup = runner
            .run(&ProcessSpec::new("python").arg("dev.py").arg("setup"))
            .unwrap();
        let lint = runner
            .run(&ProcessSpec::new("python").arg("dev.py").arg("lint"))
            .unwrap();
        assert_eq!(setup.code, 2);
        assert_eq!(lint.code, 1);
    }

    #[test]
    fn rescripting_a_word_replaces_its_code() {
        let runner = MockRunner::new().with_exit("test", 3).with_exit("test", 0);
        let exit = runner.run(&ProcessSpec::new("python").arg("test")).unwrap();
        assert!(exit.success());
    }

    #[test]
    fn clones_share_call_log() {
        let runner = MockRunner::new();
        let handle = runner.clone();
        runner.run(&ProcessSpec::new("pip").arg("install")).unwrap();
        assert_eq!(handle.calls().len(), 1);
        assert!(handle.was_invoked("install"));
        assert!(!handle.was_invoked("setup"));
    }

    #[test]
    fn spawn_failure_is_recorded_and_errors() {
        let runner = MockRunner::new().with_spawn_failure("python");
        let err = runner.run(&ProcessSpec::new("python")).unwrap_err();
        assert!(matches!(err, DevrunError::SpawnFailed { .. }));
        assert_eq!(runner.calls().len(), 1);
    }
}

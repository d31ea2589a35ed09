//! Execution harness
//!
//! Feeds one program to one target invocation. Output is discarded and there
//! is no retry.

use std::time::Duration;

use stackvm_spec::Program;
use tracing::debug;

use crate::error::Result;
use crate::outcome::Outcome;
use crate::sandbox::{Sandbox, SandboxRequest, TargetCommand, WaitResult};

pub struct Harness<S> {
    sandbox: S,
    target: TargetCommand,
    timeout: Duration,
    invocations: u64,
}

impl<S: Sandbox> Harness<S> {
    pub fn new(sandbox: S, target: TargetCommand, timeout: Duration) -> Self {
        Self {
            sandbox,
            target,
            timeout,
            invocations: 0,
        }
    }

    /// Execute a program and report how the target ended
    pub fn run(&mut self, program: &Program) -> Result<Outcome> {
        Ok(self.run_detailed(program)?.outcome)
    }

    /// Execute a program, keeping the child's pid alongside the outcome
    pub fn run_detailed(&mut self, program: &Program) -> Result<WaitResult> {
        let input = program.to_bytes();
        let request = SandboxRequest {
            target: &self.target,
            stdin: &input,
            timeout: self.timeout,
        };

        self.invocations += 1;
        let result = self.sandbox.spawn_sandboxed(&request)?;
        debug!(pid = result.pid, outcome = %result.outcome, "target finished");
        Ok(result)
    }

    /// Number of target invocations so far
    pub fn invocations(&self) -> u64 {
        self.invocations
    }

    pub fn sandbox(&self) -> &S {
        &self.sandbox
    }
}

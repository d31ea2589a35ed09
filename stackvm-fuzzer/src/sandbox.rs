//! Sandboxed target execution
//!
//! [`Sandbox`] is the one capability the harness needs: start the target
//! with a given stdin, bound it with an alarm, and report how it ended.
//! [`ProcessSandbox`] does this with a real child process whose output goes
//! to the null device; tests can substitute their own implementation.

use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;

use nix::errno::Errno;
use nix::libc::{self, c_int};
use nix::sys::signal::{kill, Signal};
use nix::unistd::{alarm, Pid};
use tracing::{debug, warn};

use crate::error::{FuzzError, Result};
use crate::outcome::Outcome;

/// Executable under test plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl TargetCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

/// One sandboxed invocation
#[derive(Debug, Clone)]
pub struct SandboxRequest<'a> {
    pub target: &'a TargetCommand,
    /// Bytes written to the child's stdin before it is closed
    pub stdin: &'a [u8],
    pub timeout: Duration,
}

/// Result of a sandboxed invocation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaitResult {
    /// Process id the child had
    pub pid: u32,
    pub outcome: Outcome,
}

pub trait Sandbox {
    /// Run the target once. The child must be fully reaped when this returns.
    fn spawn_sandboxed(&mut self, request: &SandboxRequest<'_>) -> Result<WaitResult>;
}

impl<S: Sandbox + ?Sized> Sandbox for &mut S {
    fn spawn_sandboxed(&mut self, request: &SandboxRequest<'_>) -> Result<WaitResult> {
        (**self).spawn_sandboxed(request)
    }
}

/// Runs the target as a child process bounded by `alarm(2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSandbox;

impl ProcessSandbox {
    pub fn new() -> Self {
        Self
    }
}

impl Sandbox for ProcessSandbox {
    fn spawn_sandboxed(&mut self, request: &SandboxRequest<'_>) -> Result<WaitResult> {
        let seconds = alarm_seconds(request.timeout);

        let mut command = Command::new(&request.target.program);
        command
            .args(&request.target.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // SAFETY: alarm(2) is async-signal-safe and only touches the child.
        unsafe {
            command.pre_exec(move || {
                alarm::set(seconds);
                Ok(())
            });
        }

        let mut child = command.spawn().map_err(|source| FuzzError::Spawn {
            path: request.target.program.clone(),
            source,
        })?;
        let pid = Pid::from_raw(child.id() as i32);
        debug!(pid = pid.as_raw(), bytes = request.stdin.len(), alarm = seconds, "spawned target");

        // Dropping the handle closes our end of the pipe.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(request.stdin) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!(pid = pid.as_raw(), "target closed stdin early");
                }
                Err(e) => {
                    drop(stdin);
                    kill_and_reap(pid)?;
                    return Err(FuzzError::Pipe(e));
                }
            }
        }

        let outcome = wait_for_change(pid)?;
        if !outcome.is_terminal() {
            warn!(pid = pid.as_raw(), %outcome, "target not terminated, killing");
            kill_and_reap(pid)?;
        }

        Ok(WaitResult {
            pid: child.id(),
            outcome,
        })
    }
}

/// Whole seconds for `alarm(2)`: rounded up, at least one
fn alarm_seconds(timeout: Duration) -> u32 {
    let mut seconds = timeout.as_secs();
    if timeout.subsec_nanos() > 0 {
        seconds += 1;
    }
    seconds.clamp(1, u64::from(u32::MAX)) as u32
}

/// `waitpid(2)` returning the raw status word.
///
/// `nix::sys::wait::waitpid` rejects statuses carrying signals it has no
/// `Signal` variant for (real-time signals) after the child is already
/// reaped, so the status is decoded here instead.
fn raw_waitpid(pid: Pid, options: c_int) -> std::result::Result<c_int, Errno> {
    let mut status: c_int = 0;
    loop {
        // SAFETY: `status` is a valid out-pointer for the duration of the call.
        let rc = unsafe { libc::waitpid(pid.as_raw(), &mut status, options) };
        if rc != -1 {
            return Ok(status);
        }
        match Errno::last() {
            Errno::EINTR => continue,
            errno => return Err(errno),
        }
    }
}

/// Map a raw wait status to an outcome
fn decode_status(status: c_int) -> Option<Outcome> {
    if libc::WIFEXITED(status) {
        Some(Outcome::ExitedNormally(libc::WEXITSTATUS(status)))
    } else if libc::WIFSIGNALED(status) {
        Some(Outcome::Signalled(libc::WTERMSIG(status)))
    } else if libc::WIFSTOPPED(status) {
        Some(Outcome::Stopped(libc::WSTOPSIG(status)))
    } else if libc::WIFCONTINUED(status) {
        Some(Outcome::Continued)
    } else {
        None
    }
}

/// Block until the child's state changes
fn wait_for_change(pid: Pid) -> Result<Outcome> {
    loop {
        let status = raw_waitpid(pid, libc::WUNTRACED | libc::WCONTINUED)?;
        if let Some(outcome) = decode_status(status) {
            return Ok(outcome);
        }
    }
}

/// Kill the child and collect its exit status
fn kill_and_reap(pid: Pid) -> Result<()> {
    match kill(pid, Signal::SIGKILL) {
        Ok(()) | Err(Errno::ESRCH) => {}
        Err(errno) => return Err(FuzzError::Wait(errno)),
    }

    loop {
        match raw_waitpid(pid, 0) {
            Ok(status) if libc::WIFEXITED(status) || libc::WIFSIGNALED(status) => return Ok(()),
            Ok(_) => continue,
            Err(Errno::ECHILD) => return Ok(()),
            Err(errno) => return Err(FuzzError::Wait(errno)),
        }
    }
}

//! Termination outcomes and crash classification

use std::fmt;

use stackvm_spec::TIMEOUT_SIGNAL;

/// How a target invocation ended (first status change reported by wait)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Exited with a status code
    ExitedNormally(i32),
    /// Terminated by a signal
    Signalled(i32),
    /// Stopped by a signal
    Stopped(i32),
    /// Resumed by SIGCONT
    Continued,
}

impl Outcome {
    /// Whether the process is gone after this status change
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Outcome::ExitedNormally(_) | Outcome::Signalled(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::ExitedNormally(code) => write!(f, "exited, status={}", code),
            Outcome::Signalled(signal) => write!(f, "killed by signal: {}", signal),
            Outcome::Stopped(signal) => write!(f, "stopped by signal {}", signal),
            Outcome::Continued => write!(f, "continued"),
        }
    }
}

/// What to do with a test case
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Save the input and record it in the crash log
    Persist,
    /// Report the status only
    LogOnly,
}

/// Classify with the reserved timeout signal (14)
pub fn classify(outcome: Outcome) -> Decision {
    classify_with(outcome, TIMEOUT_SIGNAL)
}

/// Classify an outcome.
///
/// Death by any signal other than `timeout_signal` is a crash. An alarm kill,
/// a normal exit, a stop or a continue is not.
pub fn classify_with(outcome: Outcome, timeout_signal: i32) -> Decision {
    match outcome {
        Outcome::Signalled(signal) if signal != timeout_signal => Decision::Persist,
        _ => Decision::LogOnly,
    }
}

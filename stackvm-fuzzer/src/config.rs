//! # Fuzz run configuration
//!
//! Defaults reproduce the reference run: 128 rounds against `./main`, a 2
//! second alarm per round, crash inputs under `testcase/`, and the crash log
//! at `samples/coverage`.

use std::path::PathBuf;
use std::time::Duration;

use stackvm_spec::{MAX_ARITY, TIMEOUT_SIGNAL};

use crate::error::ConfigError;
use crate::sandbox::TargetCommand;

/// Rounds per run
pub const DEFAULT_ITERATIONS: u32 = 128;

/// Wall-clock limit per target invocation
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Generator buffer capacity in words
pub const DEFAULT_CAPACITY: usize = 128;

/// Shortest program the generator emits
pub const MIN_PROGRAM_LEN: usize = 10;

/// Smallest capacity that holds a minimum-length program plus a completed
/// final instruction
pub const MIN_CAPACITY: usize = MIN_PROGRAM_LEN + MAX_ARITY;

pub const DEFAULT_TARGET: &str = "./main";
pub const DEFAULT_CORPUS_DIR: &str = "testcase";
pub const DEFAULT_CRASH_LOG: &str = "samples/coverage";

/// Fuzz run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzConfig {
    /// Number of generate/execute/classify rounds
    pub iterations: u32,
    /// Executable under test
    pub target: TargetCommand,
    /// Alarm armed in the child before exec
    pub timeout: Duration,
    /// Signal that marks an alarm kill rather than a crash
    pub timeout_signal: i32,
    /// Directory for crash inputs
    pub corpus_dir: PathBuf,
    /// Crash summary log
    pub crash_log: PathBuf,
    /// Generator buffer capacity in words
    pub capacity: usize,
    /// Fixed seed for a reproducible run; wall clock + CPU time when unset
    pub seed: Option<u64>,
}

impl FuzzConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            target: TargetCommand::new(DEFAULT_TARGET),
            timeout: DEFAULT_TIMEOUT,
            timeout_signal: TIMEOUT_SIGNAL,
            corpus_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
            crash_log: PathBuf::from(DEFAULT_CRASH_LOG),
            capacity: DEFAULT_CAPACITY,
            seed: None,
        }
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_target(mut self, target: TargetCommand) -> Self {
        self.target = target;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_signal(mut self, signal: i32) -> Self {
        self.timeout_signal = signal;
        self
    }

    pub fn with_corpus_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.corpus_dir = dir.into();
        self
    }

    pub fn with_crash_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.crash_log = path.into();
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::NoIterations);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.capacity < MIN_CAPACITY {
            return Err(ConfigError::CapacityTooSmall {
                capacity: self.capacity,
                min: MIN_CAPACITY,
            });
        }
        if self.target.program.as_os_str().is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        Ok(())
    }
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_run() {
        let config = FuzzConfig::default();
        assert_eq!(config.iterations, 128);
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.timeout_signal, 14);
        assert_eq!(config.target.program, PathBuf::from("./main"));
        assert!(config.target.args.is_empty());
        assert_eq!(config.corpus_dir, PathBuf::from("testcase"));
        assert_eq!(config.crash_log, PathBuf::from("samples/coverage"));
        assert_eq!(config.capacity, 128);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = FuzzConfig::new()
            .with_iterations(4)
            .with_timeout(Duration::from_millis(1500))
            .with_seed(Some(7))
            .with_corpus_dir("/tmp/corpus")
            .with_crash_log("/tmp/crashes.log");
        assert_eq!(config.iterations, 4);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.corpus_dir, PathBuf::from("/tmp/corpus"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            FuzzConfig::new().with_iterations(0).validate(),
            Err(ConfigError::NoIterations)
        );
        assert_eq!(
            FuzzConfig::new().with_timeout(Duration::ZERO).validate(),
            Err(ConfigError::ZeroTimeout)
        );
        assert_eq!(
            FuzzConfig::new().with_capacity(12).validate(),
            Err(ConfigError::CapacityTooSmall { capacity: 12, min: 13 })
        );
        assert!(FuzzConfig::new().with_capacity(13).validate().is_ok());
        assert_eq!(
            FuzzConfig::new().with_target(TargetCommand::new("")).validate(),
            Err(ConfigError::EmptyTarget)
        );
    }
}

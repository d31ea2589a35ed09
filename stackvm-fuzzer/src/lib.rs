//! # stackvm Crash Fuzzer
//!
//! Generate random, arity-consistent stackvm programs, feed each one to a
//! target VM executable on its standard input, and keep the inputs that make
//! the target die from a signal.
//!
//! ## Pipeline
//!
//! - **Generator**: random program from a seed (wall clock + CPU time by default)
//! - **Harness**: one sandboxed child per program, alarm-bounded, always reaped
//! - **Classifier**: `Signalled(s)` is a crash unless `s` is the timeout signal
//! - **Corpus**: crash inputs saved verbatim, one crash-log line each
//!
//! ## Example
//!
//! ```rust,no_run
//! use stackvm_fuzzer::{FuzzConfig, Fuzzer};
//!
//! let config = FuzzConfig::default();
//! let mut fuzzer = Fuzzer::new(config).unwrap();
//! let summary = fuzzer.run().unwrap();
//! println!("crashes: {}", summary.crashes);
//! ```

pub mod error;
pub mod config;
pub mod generator;
pub mod outcome;
pub mod sandbox;
pub mod harness;
pub mod corpus;
pub mod driver;

pub use error::{ConfigError, FuzzError, Result};
pub use config::FuzzConfig;
pub use generator::{entropy_seed, generate, target_len, SeedSource};
pub use outcome::{classify, classify_with, Decision, Outcome};
pub use sandbox::{ProcessSandbox, Sandbox, SandboxRequest, TargetCommand, WaitResult};
pub use harness::Harness;
pub use corpus::{CorpusStore, CrashLog};
pub use driver::{FuzzSummary, Fuzzer, RoundReport, TestCase};

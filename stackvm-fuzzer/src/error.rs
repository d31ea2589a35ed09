//! Fuzzer error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Iteration count must be at least 1")]
    NoIterations,

    #[error("Timeout must be non-zero")]
    ZeroTimeout,

    #[error("Program capacity {capacity} is below the minimum of {min} words")]
    CapacityTooSmall { capacity: usize, min: usize },

    #[error("Target path is empty")]
    EmptyTarget,
}

#[derive(Debug, Error)]
pub enum FuzzError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to spawn target {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write program to target stdin: {0}")]
    Pipe(#[source] std::io::Error),

    #[error("Failed to wait for target: {0}")]
    Wait(#[from] nix::errno::Errno),

    #[error("Failed to write corpus entry {}: {source}", .path.display())]
    Corpus {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write crash log {}: {source}", .path.display())]
    CrashLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FuzzError>;

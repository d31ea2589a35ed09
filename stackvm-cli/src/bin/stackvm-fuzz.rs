use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use stackvm_cli::init_tracing;
use stackvm_fuzzer::config::{
    DEFAULT_CAPACITY, DEFAULT_CORPUS_DIR, DEFAULT_CRASH_LOG, DEFAULT_ITERATIONS, DEFAULT_TARGET,
};
use stackvm_fuzzer::{FuzzConfig, Fuzzer, TargetCommand};
use stackvm_spec::TIMEOUT_SIGNAL;

/// Feed random stackvm programs to a VM and keep the ones that crash it
#[derive(Parser, Debug)]
#[command(name = "stackvm-fuzz")]
#[command(about = "Crash-fuzz a stackvm executable", long_about = None)]
struct Args {
    /// Number of rounds
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// VM executable; it reads the program on stdin
    #[arg(short, long, default_value = DEFAULT_TARGET)]
    target: PathBuf,

    /// Seconds before the target is sent its alarm
    #[arg(long, default_value_t = 2)]
    timeout: u64,

    /// Signal number treated as a timeout rather than a crash
    #[arg(long, default_value_t = TIMEOUT_SIGNAL)]
    timeout_signal: i32,

    /// Directory for crash inputs
    #[arg(long, default_value = DEFAULT_CORPUS_DIR)]
    corpus_dir: PathBuf,

    /// Crash log file
    #[arg(long, default_value = DEFAULT_CRASH_LOG)]
    crash_log: PathBuf,

    /// Generator buffer capacity in words
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Fixed seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Extra arguments passed to the target
    #[arg(last = true)]
    target_args: Vec<OsString>,
}

impl Args {
    fn into_config(self) -> FuzzConfig {
        FuzzConfig::new()
            .with_iterations(self.iterations)
            .with_target(TargetCommand::new(self.target).args(self.target_args))
            .with_timeout(Duration::from_secs(self.timeout))
            .with_timeout_signal(self.timeout_signal)
            .with_corpus_dir(self.corpus_dir)
            .with_crash_log(self.crash_log)
            .with_capacity(self.capacity)
            .with_seed(self.seed)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing("info")?;

    let config = args.into_config();
    let mut fuzzer = Fuzzer::new(config).context("failed to set up fuzz run")?;
    let summary = fuzzer.run().context("fuzz run aborted")?;

    eprintln!(
        "{} rounds: {} crashes, {} timeouts, {} exited, {} saved",
        summary.rounds,
        summary.crashes,
        summary.timeouts,
        summary.exited,
        summary.persisted.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_gives_reference_config() {
        let args = Args::try_parse_from(["stackvm-fuzz"]).unwrap();
        assert_eq!(args.into_config(), FuzzConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "stackvm-fuzz",
            "-n",
            "5",
            "--target",
            "/bin/sh",
            "--seed",
            "42",
            "--",
            "-c",
            "exit 0",
        ])
        .unwrap();
        let config = args.into_config();

        assert_eq!(config.iterations, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.target.program, PathBuf::from("/bin/sh"));
        assert_eq!(config.target.args, vec![OsString::from("-c"), OsString::from("exit 0")]);
    }
}

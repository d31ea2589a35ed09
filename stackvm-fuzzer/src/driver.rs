//! Fuzz driver loop
//!
//! Strictly sequential: generate, execute, classify, one round at a time. The
//! crash log stays open for the whole run; the only other state carried
//! between rounds is the test case counter.

use std::path::PathBuf;

use nix::sys::signal::Signal;
use stackvm_disassembler::disassemble;
use stackvm_spec::Program;
use tracing::{debug, info, warn};

use crate::config::FuzzConfig;
use crate::corpus::{CorpusStore, CrashLog};
use crate::error::Result;
use crate::generator::{generate, SeedSource};
use crate::harness::Harness;
use crate::outcome::{classify_with, Decision, Outcome};
use crate::sandbox::{ProcessSandbox, Sandbox};

/// One generated program and how the target handled it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub id: u32,
    pub program: Program,
    pub outcome: Outcome,
}

/// What happened in one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub id: u32,
    pub outcome: Outcome,
    pub decision: Decision,
    /// Corpus file, when the input was persisted
    pub persisted: Option<PathBuf>,
    pub words: usize,
}

/// Totals for a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuzzSummary {
    pub rounds: u32,
    pub exited: u32,
    pub crashes: u32,
    pub timeouts: u32,
    pub stopped: u32,
    pub continued: u32,
    pub persisted: Vec<PathBuf>,
}

impl FuzzSummary {
    fn record(&mut self, report: &RoundReport, timeout_signal: i32) {
        self.rounds += 1;
        match report.outcome {
            Outcome::ExitedNormally(_) => self.exited += 1,
            Outcome::Signalled(signal) if signal == timeout_signal => self.timeouts += 1,
            Outcome::Signalled(_) => self.crashes += 1,
            Outcome::Stopped(_) => self.stopped += 1,
            Outcome::Continued => self.continued += 1,
        }
        if let Some(path) = &report.persisted {
            self.persisted.push(path.clone());
        }
    }
}

pub struct Fuzzer<S> {
    config: FuzzConfig,
    harness: Harness<S>,
    corpus: CorpusStore,
    crash_log: CrashLog,
    seeds: SeedSource,
    next_id: u32,
}

impl Fuzzer<ProcessSandbox> {
    /// Fuzzer that runs the configured target as a real child process
    pub fn new(config: FuzzConfig) -> Result<Self> {
        Self::with_sandbox(config, ProcessSandbox::new())
    }
}

impl<S: Sandbox> Fuzzer<S> {
    /// Validate the configuration, open the corpus and crash log
    pub fn with_sandbox(config: FuzzConfig, sandbox: S) -> Result<Self> {
        config.validate()?;

        let alarm = Signal::SIGALRM as i32;
        if alarm != config.timeout_signal {
            warn!(
                sigalrm = alarm,
                timeout_signal = config.timeout_signal,
                "alarm signal differs from the reserved timeout signal; timeouts will be saved as crashes"
            );
        }

        let corpus = CorpusStore::open(&config.corpus_dir)?;
        let crash_log = CrashLog::create(&config.crash_log)?;
        let harness = Harness::new(sandbox, config.target.clone(), config.timeout);
        let seeds = SeedSource::new(config.seed);

        Ok(Self {
            config,
            harness,
            corpus,
            crash_log,
            seeds,
            next_id: 0,
        })
    }

    /// Run every configured round
    pub fn run(&mut self) -> Result<FuzzSummary> {
        info!(
            iterations = self.config.iterations,
            target = %self.config.target.program.display(),
            "starting fuzz run"
        );

        let mut summary = FuzzSummary::default();
        for _ in 0..self.config.iterations {
            let report = self.round()?;
            summary.record(&report, self.config.timeout_signal);
        }

        info!(
            rounds = summary.rounds,
            crashes = summary.crashes,
            timeouts = summary.timeouts,
            "fuzz run finished"
        );
        Ok(summary)
    }

    /// Generate one program and execute it
    pub fn round(&mut self) -> Result<RoundReport> {
        let seed = self.seeds.next_seed();
        let program = generate(seed, self.config.capacity);
        debug!(id = self.next_id, seed, words = program.len(), "generated program");
        self.execute(program)
    }

    /// Execute a given program as the next test case
    pub fn execute(&mut self, program: Program) -> Result<RoundReport> {
        let id = self.next_id;
        self.next_id += 1;

        let outcome = self.harness.run(&program)?;
        let case = TestCase {
            id,
            program,
            outcome,
        };
        self.classify(case)
    }

    fn classify(&mut self, case: TestCase) -> Result<RoundReport> {
        let decision = classify_with(case.outcome, self.config.timeout_signal);

        let persisted = match (decision, case.outcome) {
            (Decision::Persist, Outcome::Signalled(signal)) => {
                let path = self.corpus.persist(case.id, &case.program)?;
                self.crash_log.record(signal, case.id)?;
                warn!(id = case.id, signal, path = %path.display(), "crash input saved");
                match disassemble(&case.program) {
                    Ok(listing) => debug!("test_{}:\n{}", case.id, listing),
                    Err(e) => debug!(id = case.id, error = %e, "crash input does not disassemble"),
                }
                Some(path)
            }
            _ => None,
        };

        info!("{}", case.outcome);

        Ok(RoundReport {
            id: case.id,
            outcome: case.outcome,
            decision,
            persisted,
            words: case.program.len(),
        })
    }

    pub fn harness(&self) -> &Harness<S> {
        &self.harness
    }

    pub fn crash_log(&self) -> &CrashLog {
        &self.crash_log
    }

    /// Id the next test case will get
    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}

//! Crash corpus and crash log

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use stackvm_spec::Program;
use tracing::debug;

use crate::error::{FuzzError, Result};

/// Directory of crash inputs, one raw artifact per test case
#[derive(Debug, Clone)]
pub struct CorpusStore {
    dir: PathBuf,
}

impl CorpusStore {
    /// Open the corpus directory, creating it if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| FuzzError::Corpus {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// File that holds the input for a test case
    pub fn entry_path(&self, id: u32) -> PathBuf {
        self.dir.join(format!("test_{}", id))
    }

    /// Write a program's encoded words verbatim
    pub fn persist(&self, id: u32, program: &Program) -> Result<PathBuf> {
        let path = self.entry_path(id);
        fs::write(&path, program.to_bytes()).map_err(|source| FuzzError::Corpus {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = program.byte_len(), "corpus entry written");
        Ok(path)
    }
}

/// Crash summary log, one line per persisted input.
///
/// Created (truncated) when the run starts and closed when dropped.
#[derive(Debug)]
pub struct CrashLog {
    file: File,
    path: PathBuf,
    entries: usize,
}

impl CrashLog {
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let fail = |source| FuzzError::CrashLog {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(fail)?;
        }
        let file = File::create(&path).map_err(fail)?;

        Ok(Self {
            file,
            path,
            entries: 0,
        })
    }

    /// Append one crash record
    pub fn record(&mut self, signal: i32, id: u32) -> Result<()> {
        writeln!(self.file, "killed by signal: {}, testcase: {}", signal, id)
            .and_then(|()| self.file.flush())
            .map_err(|source| FuzzError::CrashLog {
                path: self.path.clone(),
                source,
            })?;
        self.entries += 1;
        Ok(())
    }

    /// Records written so far
    pub fn entries(&self) -> usize {
        self.entries
    }
}

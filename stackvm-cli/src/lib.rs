//! Shared setup for the stackvm command-line tools

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use anyhow::{Context, Result};
use stackvm_assembler::assemble;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr subscriber. `RUST_LOG` overrides `default_level`.
pub fn init_tracing(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("invalid log filter")?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install log subscriber")
}

/// Assemble `source` into `output`, or into `stdout` when no output path is
/// given. Nothing is written unless the whole source assembles.
pub fn assemble_command(source: &Path, output: Option<&Path>, stdout: &mut dyn Write) -> Result<()> {
    let bytes = read_artifact(source)?;
    let program = assemble(&String::from_utf8_lossy(&bytes))?;

    match output {
        Some(path) => {
            write_artifact(path, &program.to_bytes())?;
            info!(words = program.len(), path = %path.display(), "wrote program");
        }
        None => {
            stdout
                .write_all(&program.to_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write program to stdout")?;
        }
    }
    Ok(())
}

/// Write an artifact, created or truncated with mode 0755
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o755)
        .open(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Read an artifact as raw bytes
pub fn read_artifact(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

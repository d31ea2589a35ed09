use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stackvm_cli::{init_tracing, read_artifact};
use stackvm_disassembler::{disassemble, to_source};
use stackvm_spec::Program;

/// Print a compiled stackvm program as a listing
#[derive(Parser, Debug)]
#[command(name = "stackvm-dis")]
#[command(about = "Disassemble a stackvm program", long_about = None)]
struct Args {
    /// Compiled program (raw native-endian words)
    program: PathBuf,

    /// Emit plain reassemblable source instead of the annotated listing
    #[arg(long)]
    source: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing("warn")?;

    let bytes = read_artifact(&args.program)?;
    let program = Program::from_bytes(&bytes)
        .with_context(|| format!("{} is not a stackvm program", args.program.display()))?;

    let text = if args.source {
        to_source(&program)?
    } else {
        disassemble(&program)?
    };
    println!("{}", text);

    Ok(())
}

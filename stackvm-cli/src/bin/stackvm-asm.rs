use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use stackvm_cli::{assemble_command, init_tracing};

/// Assemble stackvm source into a flat word stream
#[derive(Parser, Debug)]
#[command(name = "stackvm-asm")]
#[command(about = "Assemble stackvm source", long_about = None)]
struct Args {
    /// Assembly source file
    source: PathBuf,

    /// Output file (raw bytes go to stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing("warn")?;

    let mut stdout = io::stdout().lock();
    assemble_command(&args.source, args.output.as_deref(), &mut stdout)
}

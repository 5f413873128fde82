//! embedgen CLI - embeds a binary asset into a C source file
//!
//! With no arguments, reads `guitar.mp3` and writes `guitar_mp3_data.c` in
//! the current directory.

use clap::Parser;
use std::process::ExitCode;

use embedgen_cli::commands;

/// embedgen - Generate C byte arrays from binary assets
#[derive(Parser)]
#[command(name = "embedgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON config file (symbols, section, alignment, line layout)
    #[arg(short, long)]
    config: Option<String>,

    /// Input file to embed (default: guitar.mp3)
    #[arg(short, long)]
    input: Option<String>,

    /// Generated C source path (default: guitar_mp3_data.c)
    #[arg(short, long)]
    output: Option<String>,

    /// Verify the output is up to date instead of writing it
    #[arg(long)]
    check: bool,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = if cli.check {
        commands::check::run(
            cli.config.as_deref(),
            cli.input.as_deref(),
            cli.output.as_deref(),
            cli.json,
        )
    } else {
        commands::convert::run(
            cli.config.as_deref(),
            cli.input.as_deref(),
            cli.output.as_deref(),
            cli.json,
        )
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

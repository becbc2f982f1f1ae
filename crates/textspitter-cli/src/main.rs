//! Command-line interface for textspitter.
//!
//! Extracts text from each given file, joins the results with newlines, and
//! writes them to stdout or to the `-o` target. Per-file failures never stop
//! the run: they are collected, reported to stderr after all files have been
//! attempted, and reflected in a non-zero exit status.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "textspitter",
    version,
    about = "Extract text from PDF, DOCX, TXT, CSV, and source-code files."
)]
struct Cli {
    /// Path(s) to the file(s) to extract text from.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Write extracted text to FILE instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut parts: Vec<String> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    for path in &cli.files {
        match textspitter::extract_file(path) {
            Ok(text) => parts.push(text),
            Err(e) => errors.push(format!("Error processing {}: {}", path.display(), e)),
        }
    }

    let result = parts.join("\n");

    match &cli.output {
        Some(output) => {
            std::fs::write(output, &result)
                .with_context(|| format!("failed to write output to {}", output.display()))?;
        }
        None => println!("{result}"),
    }

    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        for err in &errors {
            eprintln!("{err}");
        }
        Ok(ExitCode::FAILURE)
    }
}

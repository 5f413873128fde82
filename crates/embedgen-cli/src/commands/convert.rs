//! Convert command implementation
//!
//! Reads the input file and writes it out as a C byte array.

use anyhow::Result;
use colored::Colorize;
use embedgen_core::{ConversionReport, EmbedError};
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{embed_error_to_json, CommandOutput};
use super::reporting;

/// Run the convert command
///
/// # Arguments
/// * `config_path` - Optional JSON config file
/// * `input` - Input file override
/// * `output` - Output file override
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 invalid config
pub fn run(
    config_path: Option<&str>,
    input: Option<&str>,
    output: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(config_path, input, output)
    } else {
        run_human(config_path, input, output)
    }
}

fn run_human(config_path: Option<&str>, input: Option<&str>, output: Option<&str>) -> Result<ExitCode> {
    let start = Instant::now();
    let config = reporting::load_config(config_path, input, output)?;

    println!(
        "{} {} -> {}",
        "Converting:".cyan().bold(),
        config.input.display(),
        config.output.display()
    );

    let summary = match embedgen_core::convert(&config) {
        Ok(summary) => summary,
        Err(EmbedError::InvalidConfig(errors)) => {
            reporting::print_config_errors(&errors);
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e.into()),
    };
    reporting::print_warnings(&summary.warnings);
    let duration_ms = start.elapsed().as_millis() as u64;

    println!(
        "{} File created: {} ({} bytes)",
        "SUCCESS".green().bold(),
        summary.output.display(),
        summary.byte_count
    );
    println!(
        "{} {} line(s), blake3 {} ({}ms)",
        "Layout:".dimmed(),
        summary.line_count,
        reporting::short_hash(&summary.input_hash),
        duration_ms
    );

    Ok(ExitCode::SUCCESS)
}

fn run_json(config_path: Option<&str>, input: Option<&str>, output: Option<&str>) -> Result<ExitCode> {
    let start = Instant::now();
    let result = reporting::load_config(config_path, input, output)
        .and_then(|config| embedgen_core::convert(&config));

    let output = match result {
        Ok(summary) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            let report = ConversionReport::from_summary(&summary).duration_ms(duration_ms);
            CommandOutput::success("convert", report)
        }
        Err(e) => CommandOutput::failure("convert", embed_error_to_json(&e), None),
    };
    output.print()?;

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

//! Check command implementation
//!
//! Verifies that a generated source matches its input without rewriting it.

use anyhow::Result;
use colored::Colorize;
use embedgen_core::{CheckOutcome, CheckStatus, ConversionReport, EmbedError};
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{embed_error_to_json, error_codes, CommandOutput, JsonError};
use super::reporting;

/// Run the check command
///
/// # Returns
/// Exit code: 0 if the output is up to date, 1 if it is missing, stale, or
/// the config is invalid
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
    let config = reporting::load_config(config_path, input, output)?;

    println!(
        "{} {} against {}",
        "Checking:".cyan().bold(),
        config.output.display(),
        config.input.display()
    );

    let outcome = match embedgen_core::check(&config) {
        Ok(outcome) => outcome,
        Err(EmbedError::InvalidConfig(errors)) => {
            reporting::print_config_errors(&errors);
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e.into()),
    };
    reporting::print_warnings(&outcome.summary.warnings);
    if outcome.is_up_to_date() {
        println!(
            "{} {} is up to date ({} bytes)",
            "SUCCESS".green().bold(),
            outcome.summary.output.display(),
            outcome.summary.byte_count
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{} {}", "FAILED".red().bold(), stale_message(&outcome));
        Ok(ExitCode::from(1))
    }
}

fn run_json(config_path: Option<&str>, input: Option<&str>, output: Option<&str>) -> Result<ExitCode> {
    let start = Instant::now();
    let result = reporting::load_config(config_path, input, output)
        .and_then(|config| embedgen_core::check(&config));

    let output = match result {
        Ok(outcome) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            let report = ConversionReport::from_check(&outcome).duration_ms(duration_ms);
            if outcome.is_up_to_date() {
                CommandOutput::success("check", report)
            } else {
                let error = JsonError::new(error_codes::OUTPUT_STALE, stale_message(&outcome));
                CommandOutput::failure("check", vec![error], Some(report))
            }
        }
        Err(e) => CommandOutput::failure("check", embed_error_to_json(&e), None),
    };
    output.print()?;

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn stale_message(outcome: &CheckOutcome) -> String {
    let summary = &outcome.summary;
    match outcome.status {
        CheckStatus::UpToDate => format!("{} is up to date", summary.output.display()),
        CheckStatus::Missing => format!("{} does not exist", summary.output.display()),
        CheckStatus::Stale {
            embedded_bytes: Some(embedded),
        } => format!(
            "{} is out of date (embeds {} bytes, input has {} bytes)",
            summary.output.display(),
            embedded,
            summary.byte_count
        ),
        CheckStatus::Stale {
            embedded_bytes: None,
        } => format!(
            "{} is out of date (no readable byte array)",
            summary.output.display()
        ),
    }
}

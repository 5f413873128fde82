use colored::Colorize;
use embedgen_core::{EmbedConfig, EmbedError, ValidationError, ValidationWarning};

/// Resolves the effective config: defaults, then the config file, then
/// command-line path overrides.
pub(crate) fn load_config(
    config_path: Option<&str>,
    input: Option<&str>,
    output: Option<&str>,
) -> Result<EmbedConfig, EmbedError> {
    let mut config = match config_path {
        Some(path) => EmbedConfig::from_json_file(path)?,
        None => EmbedConfig::default(),
    };
    if let Some(input) = input {
        config = config.with_input(input);
    }
    if let Some(output) = output {
        config = config.with_output(output);
    }
    Ok(config)
}

/// Prints config warnings.
pub(crate) fn print_warnings(warnings: &[ValidationWarning]) {
    for warning in warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
}

/// Prints the errors that rejected a config.
pub(crate) fn print_config_errors(errors: &[ValidationError]) {
    println!("\n{}", "Config errors:".red().bold());
    for error in errors {
        println!("  {} {}", "x".red(), error);
    }
    println!(
        "\n{} Config has {} error(s)",
        "FAILED".red().bold(),
        errors.len()
    );
}

/// Short hash prefix for display.
pub(crate) fn short_hash(hash: &str) -> &str {
    &hash[..hash.len().min(16)]
}

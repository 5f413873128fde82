//! Machine-readable output for `--json`.

use embedgen_core::{ConversionReport, EmbedError};
use serde::Serialize;

/// Stable error codes for CLI-level failures.
pub mod error_codes {
    /// Config file could not be read
    pub const CONFIG_READ: &str = "CLI_001";
    /// Config file is not valid JSON
    pub const CONFIG_PARSE: &str = "CLI_002";
    /// Input file could not be read
    pub const INPUT_READ: &str = "CLI_003";
    /// Output file could not be read or written
    pub const OUTPUT_IO: &str = "CLI_004";
    /// Output is missing or out of date
    pub const OUTPUT_STALE: &str = "CLI_006";
}

/// A single error in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_003", "E001")
    pub code: String,
    pub message: String,
    /// Config field the error concerns (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }
}

/// Top-level JSON document printed by every command.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutput {
    pub success: bool,
    /// "convert" or "check"
    pub command: &'static str,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ConversionReport>,
}

impl CommandOutput {
    pub fn success(command: &'static str, report: ConversionReport) -> Self {
        Self {
            success: true,
            command,
            errors: Vec::new(),
            report: Some(report),
        }
    }

    pub fn failure(
        command: &'static str,
        errors: Vec<JsonError>,
        report: Option<ConversionReport>,
    ) -> Self {
        Self {
            success: false,
            command,
            errors,
            report,
        }
    }

    /// Prints the document as pretty JSON on stdout.
    pub fn print(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

/// Maps a conversion error to one or more JSON errors.
pub fn embed_error_to_json(err: &EmbedError) -> Vec<JsonError> {
    let code = match err {
        EmbedError::InvalidConfig(errors) => {
            return errors
                .iter()
                .map(|e| JsonError {
                    code: e.code.to_string(),
                    message: e.message.clone(),
                    field: e.field.clone(),
                })
                .collect();
        }
        EmbedError::ConfigIo { .. } => error_codes::CONFIG_READ,
        EmbedError::ConfigParse { .. } => error_codes::CONFIG_PARSE,
        EmbedError::ReadInput { .. } => error_codes::INPUT_READ,
        EmbedError::ReadOutput { .. } | EmbedError::WriteOutput { .. } => error_codes::OUTPUT_IO,
    };
    vec![JsonError::new(code, full_message(err))]
}

/// Formats an error with its source chain.
fn full_message(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedgen_core::{ErrorCode, ValidationError};
    use std::path::PathBuf;

    #[test]
    fn test_invalid_config_expands_to_validation_codes() {
        let err = EmbedError::InvalidConfig(vec![
            ValidationError::with_field(ErrorCode::InvalidAlignment, "bad", "alignment"),
            ValidationError::with_field(ErrorCode::InvalidLineWidth, "zero", "bytes_per_line"),
        ]);
        let errors = embed_error_to_json(&err);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].code, "E004");
        assert_eq!(errors[1].field.as_deref(), Some("bytes_per_line"));
    }

    #[test]
    fn test_io_error_includes_cause() {
        let err = EmbedError::ReadInput {
            path: PathBuf::from("guitar.mp3"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file missing"),
        };
        let errors = embed_error_to_json(&err);
        assert_eq!(errors[0].code, error_codes::INPUT_READ);
        assert_eq!(errors[0].message, "failed to read input guitar.mp3: file missing");
    }

    #[test]
    fn test_config_and_output_errors_map_to_cli_codes() {
        let missing = || std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let cases = [
            (
                EmbedError::ConfigIo {
                    path: PathBuf::from("embed.json"),
                    source: missing(),
                },
                error_codes::CONFIG_READ,
            ),
            (
                EmbedError::ReadOutput {
                    path: PathBuf::from("guitar_mp3_data.c"),
                    source: missing(),
                },
                error_codes::OUTPUT_IO,
            ),
            (
                EmbedError::WriteOutput {
                    path: PathBuf::from("guitar_mp3_data.c"),
                    source: missing(),
                },
                error_codes::OUTPUT_IO,
            ),
        ];
        for (err, code) in cases {
            assert_eq!(embed_error_to_json(&err)[0].code, code);
        }
    }

    #[test]
    fn test_failure_output_shape() {
        let output = CommandOutput::failure(
            "check",
            vec![JsonError::new(error_codes::OUTPUT_STALE, "stale")],
            None,
        );
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["command"], "check");
        assert_eq!(value["errors"][0]["code"], "CLI_006");
        assert!(value.get("report").is_none());
    }
}

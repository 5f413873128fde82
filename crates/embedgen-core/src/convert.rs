//! File-to-source conversion.
//!
//! The input is read and closed before the output is opened. A failure while
//! writing may leave the output empty or partially written.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::EmbedConfig;
use crate::error::{EmbedError, ValidationWarning};
use crate::extract::extract_bytes;
use crate::hash::content_hash;
use crate::render::{line_count, render_source, write_source};
use crate::validation::validate_config;

/// Summary of a completed conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of bytes read from the input (and the emitted size constant).
    pub byte_count: usize,
    /// Number of element lines in the array body.
    pub line_count: usize,
    /// BLAKE3 hex hash of the input bytes.
    pub input_hash: String,
    /// Non-fatal config findings.
    pub warnings: Vec<ValidationWarning>,
}

/// State of an existing generated file relative to its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// The output matches what would be generated.
    UpToDate,
    /// The output does not exist.
    Missing,
    /// The output differs. `embedded_bytes` is the array length found in the
    /// file, if it could be parsed.
    Stale { embedded_bytes: Option<usize> },
}

/// Result of comparing an existing output with a fresh render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub summary: ConversionSummary,
    pub status: CheckStatus,
}

impl CheckOutcome {
    /// Returns true if the output is up to date.
    pub fn is_up_to_date(&self) -> bool {
        self.status == CheckStatus::UpToDate
    }
}

/// Reads an input file fully into memory.
pub fn read_input(path: &Path) -> Result<Vec<u8>, EmbedError> {
    fs::read(path).map_err(|source| EmbedError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the generated source for `data` to `config.output`, truncating it.
pub fn write_output(data: &[u8], config: &EmbedConfig) -> Result<(), EmbedError> {
    let write = || -> io::Result<()> {
        let file = File::create(&config.output)?;
        let mut out = BufWriter::new(file);
        write_source(&mut out, data, config)?;
        out.flush()
    };
    write().map_err(|source| EmbedError::WriteOutput {
        path: config.output.clone(),
        source,
    })
}

/// Converts `config.input` into a generated source at `config.output`.
///
/// # Example
/// ```no_run
/// use embedgen_core::{convert, EmbedConfig};
///
/// let summary = convert(&EmbedConfig::default()).unwrap();
/// println!("{} bytes", summary.byte_count);
/// ```
pub fn convert(config: &EmbedConfig) -> Result<ConversionSummary, EmbedError> {
    let warnings = checked_warnings(config)?;
    let data = read_input(&config.input)?;
    write_output(&data, config)?;
    Ok(summarize(config, &data, warnings))
}

/// Compares `config.output` against a fresh render of `config.input` without
/// writing anything.
pub fn check(config: &EmbedConfig) -> Result<CheckOutcome, EmbedError> {
    let warnings = checked_warnings(config)?;
    let data = read_input(&config.input)?;
    let expected = render_source(&data, config);

    let status = match fs::read_to_string(&config.output) {
        Ok(existing) if existing == expected => CheckStatus::UpToDate,
        Ok(existing) => CheckStatus::Stale {
            embedded_bytes: extract_bytes(&existing, &config.array_symbol)
                .ok()
                .map(|bytes| bytes.len()),
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => CheckStatus::Missing,
        // Non-UTF-8 content cannot be a generated source.
        Err(err) if err.kind() == io::ErrorKind::InvalidData => CheckStatus::Stale {
            embedded_bytes: None,
        },
        Err(source) => {
            return Err(EmbedError::ReadOutput {
                path: config.output.clone(),
                source,
            })
        }
    };

    Ok(CheckOutcome {
        summary: summarize(config, &data, warnings),
        status,
    })
}

fn checked_warnings(config: &EmbedConfig) -> Result<Vec<ValidationWarning>, EmbedError> {
    validate_config(config)
        .into_result()
        .map_err(EmbedError::InvalidConfig)
}

fn summarize(
    config: &EmbedConfig,
    data: &[u8],
    warnings: Vec<ValidationWarning>,
) -> ConversionSummary {
    ConversionSummary {
        input: config.input.clone(),
        output: config.output.clone(),
        byte_count: data.len(),
        line_count: line_count(data.len(), config.bytes_per_line),
        input_hash: content_hash(data),
        warnings,
    }
}

//! Error types for config validation, extraction, and conversion.

use std::path::PathBuf;

use thiserror::Error;

/// Error codes for config validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Array symbol is not a C identifier
    InvalidArraySymbol,
    /// E002: Size symbol is not a C identifier
    InvalidSizeSymbol,
    /// E003: Array and size symbols collide
    DuplicateSymbol,
    /// E004: Alignment is zero or not a power of two
    InvalidAlignment,
    /// E005: Zero bytes per line
    InvalidLineWidth,
    /// E006: Section name is empty or not quotable
    InvalidSection,
    /// E007: Input and output refer to the same path
    OutputOverwritesInput,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArraySymbol => "E001",
            ErrorCode::InvalidSizeSymbol => "E002",
            ErrorCode::DuplicateSymbol => "E003",
            ErrorCode::InvalidAlignment => "E004",
            ErrorCode::InvalidLineWidth => "E005",
            ErrorCode::InvalidSection => "E006",
            ErrorCode::OutputOverwritesInput => "E007",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for config validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Output file does not look like a C source file
    UnexpectedOutputExtension,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::UnexpectedOutputExtension => "W001",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and the config field it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub code: ErrorCode,
    pub message: String,
    /// Config field name (e.g., "array_symbol").
    pub field: Option<String>,
}

impl ValidationError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(code: ErrorCode, message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref field) = self.field {
            write!(f, "{}: {} (at {})", self.code, self.message, field)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and the config field it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub code: WarningCode,
    pub message: String,
    pub field: Option<String>,
}

impl ValidationWarning {
    pub fn with_field(
        code: WarningCode,
        message: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref field) = self.field {
            write!(f, "{}: {} (at {})", self.code, self.message, field)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Result of config validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Errors raised while reading a generated source file back into bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The array declaration was not found.
    #[error("array `{0}` not found")]
    MissingArray(String),

    /// The array literal was opened but never closed.
    #[error("array `{0}` is not terminated")]
    UnterminatedArray(String),

    /// A token inside the array literal is not a `0xHH` byte.
    #[error("invalid byte token `{token}` at index {index}")]
    InvalidToken { index: usize, token: String },

    /// The size constant was not found or is not a decimal integer.
    #[error("size constant `{0}` not found")]
    MissingSize(String),
}

/// Top-level error type for conversion operations.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The input file could not be read.
    #[error("failed to read input {}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("failed to write output {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An existing output file could not be read.
    #[error("failed to read output {}", .path.display())]
    ReadOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be read.
    #[error("failed to read config {}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for an `EmbedConfig`.
    #[error("failed to parse config {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Config validation failed with one or more errors.
    #[error("config validation failed with {} error(s)", .0.len())]
    InvalidConfig(Vec<ValidationError>),
}

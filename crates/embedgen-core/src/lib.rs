//! embedgen core library
//!
//! Turns a binary asset (typically an MP3 clip for a firmware audio player)
//! into a C source file holding the bytes as a `uint8_t` array placed in a
//! read-only, aligned section, followed by a `size_t` length constant.
//!
//! # Example
//!
//! ```
//! use embedgen_core::{render_source, EmbedConfig};
//!
//! let source = render_source(&[0x00, 0xFF, 0x10], &EmbedConfig::default());
//! assert!(source.contains("    0x00, 0xFF, 0x10\n};"));
//! assert!(source.contains("const size_t mp3_file_size = 3;"));
//! ```
//!
//! # Modules
//!
//! - [`config`]: Conversion configuration and its defaults
//! - [`validation`]: Config validation
//! - [`render`]: C source rendering
//! - [`extract`]: Parsing generated sources back into bytes
//! - [`convert`]: File-level convert and check operations
//! - [`hash`]: Content hashing
//! - [`report`]: Serializable run reports
//! - [`error`]: Error and warning types

pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod hash;
pub mod render;
pub mod report;
pub mod validation;

// Re-export commonly used types at the crate root
pub use config::EmbedConfig;
pub use convert::{check, convert, CheckOutcome, CheckStatus, ConversionSummary};
pub use error::{
    EmbedError, ErrorCode, ExtractError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use render::{render_source, write_source};
pub use report::ConversionReport;

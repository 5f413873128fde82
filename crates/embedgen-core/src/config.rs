//! Conversion configuration.
//!
//! An [`EmbedConfig`] names the input and output files and every symbol and
//! annotation that ends up in the generated source. The defaults reproduce the
//! layout firmware consumers already link against (`mp3_file_data` /
//! `mp3_file_size` in `.rodata`, 4-byte aligned).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::EmbedError;

/// Default input file.
pub const DEFAULT_INPUT: &str = "guitar.mp3";

/// Default generated source file.
pub const DEFAULT_OUTPUT: &str = "guitar_mp3_data.c";

/// Default name of the byte array.
pub const DEFAULT_ARRAY_SYMBOL: &str = "mp3_file_data";

/// Default name of the size constant.
pub const DEFAULT_SIZE_SYMBOL: &str = "mp3_file_size";

/// Default linker section for the array.
pub const DEFAULT_SECTION: &str = ".rodata";

/// Default array alignment in bytes.
pub const DEFAULT_ALIGNMENT: u32 = 4;

/// Default number of byte tokens per line.
pub const DEFAULT_BYTES_PER_LINE: usize = 12;

/// Default indentation (spaces) of each element line.
pub const DEFAULT_INDENT: usize = 4;

/// Configuration for one file-to-source conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmbedConfig {
    /// Binary file to embed.
    pub input: PathBuf,
    /// C source file to generate.
    pub output: PathBuf,
    /// Symbol of the `uint8_t` array.
    pub array_symbol: String,
    /// Symbol of the `size_t` length constant.
    pub size_symbol: String,
    /// Linker section the array is placed in.
    pub section: String,
    /// Alignment of the array in bytes.
    pub alignment: u32,
    /// Byte tokens per line.
    pub bytes_per_line: usize,
    /// Spaces before each element line.
    pub indent: usize,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            array_symbol: DEFAULT_ARRAY_SYMBOL.to_string(),
            size_symbol: DEFAULT_SIZE_SYMBOL.to_string(),
            section: DEFAULT_SECTION.to_string(),
            alignment: DEFAULT_ALIGNMENT,
            bytes_per_line: DEFAULT_BYTES_PER_LINE,
            indent: DEFAULT_INDENT,
        }
    }
}

impl EmbedConfig {
    /// Loads a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EmbedError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| EmbedError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| EmbedError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Sets the input path.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Sets the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// The input's file name as written in the provenance comment.
    pub fn input_display_name(&self) -> String {
        self.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_firmware_layout() {
        let config = EmbedConfig::default();
        assert_eq!(config.input, PathBuf::from("guitar.mp3"));
        assert_eq!(config.output, PathBuf::from("guitar_mp3_data.c"));
        assert_eq!(config.array_symbol, "mp3_file_data");
        assert_eq!(config.size_symbol, "mp3_file_size");
        assert_eq!(config.section, ".rodata");
        assert_eq!(config.alignment, 4);
        assert_eq!(config.bytes_per_line, 12);
        assert_eq!(config.indent, 4);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config: EmbedConfig = serde_json::from_str(
            r#"{ "input": "dog.mp3", "array_symbol": "dog_mp3_file_data" }"#,
        )
        .unwrap();
        assert_eq!(config.input, PathBuf::from("dog.mp3"));
        assert_eq!(config.array_symbol, "dog_mp3_file_data");
        assert_eq!(config.size_symbol, DEFAULT_SIZE_SYMBOL);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<EmbedConfig, _> = serde_json::from_str(r#"{ "symbol": "x" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("embed.json");
        fs::write(&path, r#"{ "bytes_per_line": 16, "alignment": 8 }"#).unwrap();

        let config = EmbedConfig::from_json_file(&path).unwrap();
        assert_eq!(config.bytes_per_line, 16);
        assert_eq!(config.alignment, 8);
    }

    #[test]
    fn test_from_json_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = EmbedConfig::from_json_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, EmbedError::ConfigIo { .. }));
    }

    #[test]
    fn test_from_json_file_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("embed.json");
        fs::write(&path, "{ not json").unwrap();
        let err = EmbedConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, EmbedError::ConfigParse { .. }));
    }

    #[test]
    fn test_input_display_name_strips_directories() {
        let config = EmbedConfig::default().with_input("assets/sounds/dog.mp3");
        assert_eq!(config.input_display_name(), "dog.mp3");
    }
}

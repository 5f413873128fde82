//! Config validation logic.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::config::EmbedConfig;
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};

/// Regex pattern for a C identifier.
const C_IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

static C_IDENTIFIER_REGEX: OnceLock<Regex> = OnceLock::new();

fn c_identifier_regex() -> &'static Regex {
    C_IDENTIFIER_REGEX.get_or_init(|| Regex::new(C_IDENTIFIER_PATTERN).expect("invalid regex pattern"))
}

/// Returns true if `name` can be used as a C symbol.
pub fn is_c_identifier(name: &str) -> bool {
    c_identifier_regex().is_match(name)
}

/// Validates a config and returns a validation result.
///
/// # Example
/// ```
/// use embedgen_core::{EmbedConfig, validation::validate_config};
///
/// let result = validate_config(&EmbedConfig::default());
/// assert!(result.is_ok());
/// ```
pub fn validate_config(config: &EmbedConfig) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_symbols(config, &mut result);
    validate_layout(config, &mut result);
    validate_section(config, &mut result);
    validate_paths(config, &mut result);

    result
}

fn validate_symbols(config: &EmbedConfig, result: &mut ValidationResult) {
    if !is_c_identifier(&config.array_symbol) {
        result.add_error(ValidationError::with_field(
            ErrorCode::InvalidArraySymbol,
            format!("'{}' is not a valid C identifier", config.array_symbol),
            "array_symbol",
        ));
    }
    if !is_c_identifier(&config.size_symbol) {
        result.add_error(ValidationError::with_field(
            ErrorCode::InvalidSizeSymbol,
            format!("'{}' is not a valid C identifier", config.size_symbol),
            "size_symbol",
        ));
    }
    if config.array_symbol == config.size_symbol {
        result.add_error(ValidationError::with_field(
            ErrorCode::DuplicateSymbol,
            format!(
                "array and size constant share the symbol '{}'",
                config.array_symbol
            ),
            "size_symbol",
        ));
    }
}

fn validate_layout(config: &EmbedConfig, result: &mut ValidationResult) {
    if !config.alignment.is_power_of_two() {
        result.add_error(ValidationError::with_field(
            ErrorCode::InvalidAlignment,
            format!(
                "alignment must be a power of two, got {}",
                config.alignment
            ),
            "alignment",
        ));
    }
    if config.bytes_per_line == 0 {
        result.add_error(ValidationError::with_field(
            ErrorCode::InvalidLineWidth,
            "bytes_per_line must be at least 1",
            "bytes_per_line",
        ));
    }
}

fn validate_section(config: &EmbedConfig, result: &mut ValidationResult) {
    let section = &config.section;
    if section.is_empty() || section.contains(['"', '\\']) || section.contains(char::is_control) {
        result.add_error(ValidationError::with_field(
            ErrorCode::InvalidSection,
            format!("section name {:?} cannot be used in an attribute", section),
            "section",
        ));
    }
}

fn validate_paths(config: &EmbedConfig, result: &mut ValidationResult) {
    if same_file(&config.input, &config.output) {
        result.add_error(ValidationError::with_field(
            ErrorCode::OutputOverwritesInput,
            format!(
                "output would overwrite the input file {}",
                config.input.display()
            ),
            "output",
        ));
    }

    let is_c_source = config
        .output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("c"));
    if !is_c_source {
        result.add_warning(ValidationWarning::with_field(
            WarningCode::UnexpectedOutputExtension,
            format!("{} does not have a .c extension", config.output.display()),
            "output",
        ));
    }
}

/// Returns true if `a` and `b` name the same file once `.`/`..` segments,
/// symlinks, and the working directory are resolved. Neither file has to
/// exist.
fn same_file(a: &Path, b: &Path) -> bool {
    resolve_path(a) == resolve_path(b)
}

fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(path) {
        return canonical;
    }

    let normalized = normalize_lexically(path);
    if let (Some(parent), Some(name)) = (normalized.parent(), normalized.file_name()) {
        let parent = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };
        if let Ok(canonical_parent) = fs::canonicalize(parent) {
            return canonical_parent.join(name);
        }
    }
    normalized
}

/// Drops `.` segments and folds `name/..` pairs without touching the disk.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let ends_in_name = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if ends_in_name {
                    normalized.pop();
                } else if !matches!(
                    normalized.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_))
                ) {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_codes(config: &EmbedConfig) -> Vec<ErrorCode> {
        validate_config(config)
            .errors
            .iter()
            .map(|e| e.code)
            .collect()
    }

    #[test]
    fn test_default_config_is_valid() {
        let result = validate_config(&EmbedConfig::default());
        assert!(result.is_ok());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_c_identifiers() {
        assert!(is_c_identifier("mp3_file_data"));
        assert!(is_c_identifier("_private"));
        assert!(is_c_identifier("Dog2"));
        assert!(!is_c_identifier(""));
        assert!(!is_c_identifier("2dog"));
        assert!(!is_c_identifier("dog-bark"));
        assert!(!is_c_identifier("dog bark"));
    }

    #[test]
    fn test_invalid_symbols() {
        let config = EmbedConfig {
            array_symbol: "guitar-data".to_string(),
            size_symbol: "9size".to_string(),
            ..EmbedConfig::default()
        };
        assert_eq!(
            error_codes(&config),
            vec![ErrorCode::InvalidArraySymbol, ErrorCode::InvalidSizeSymbol]
        );
    }

    #[test]
    fn test_duplicate_symbols() {
        let config = EmbedConfig {
            size_symbol: "mp3_file_data".to_string(),
            ..EmbedConfig::default()
        };
        assert_eq!(error_codes(&config), vec![ErrorCode::DuplicateSymbol]);
    }

    #[test]
    fn test_alignment_must_be_power_of_two() {
        for alignment in [0, 3, 6, 12] {
            let config = EmbedConfig {
                alignment,
                ..EmbedConfig::default()
            };
            assert_eq!(error_codes(&config), vec![ErrorCode::InvalidAlignment]);
        }
        for alignment in [1, 2, 4, 32] {
            let config = EmbedConfig {
                alignment,
                ..EmbedConfig::default()
            };
            assert!(validate_config(&config).is_ok());
        }
    }

    #[test]
    fn test_zero_bytes_per_line() {
        let config = EmbedConfig {
            bytes_per_line: 0,
            ..EmbedConfig::default()
        };
        assert_eq!(error_codes(&config), vec![ErrorCode::InvalidLineWidth]);
    }

    #[test]
    fn test_bad_sections() {
        for section in ["", "\".data", "a\\b", "x\ny"] {
            let config = EmbedConfig {
                section: section.to_string(),
                ..EmbedConfig::default()
            };
            assert_eq!(error_codes(&config), vec![ErrorCode::InvalidSection]);
        }
    }

    #[test]
    fn test_output_overwrites_input() {
        let config = EmbedConfig::default().with_output("guitar.mp3");
        let result = validate_config(&config);
        assert_eq!(result.errors[0].code, ErrorCode::OutputOverwritesInput);
    }

    #[test]
    fn test_output_overwrites_input_through_dot_segments() {
        for output in ["./guitar.mp3", "sub/../guitar.mp3", "./sub/.././guitar.mp3"] {
            let config = EmbedConfig::default().with_output(output);
            let result = validate_config(&config);
            assert!(!result.is_ok(), "{} should be rejected", output);
            assert_eq!(result.errors[0].code, ErrorCode::OutputOverwritesInput);
        }
    }

    #[test]
    fn test_output_overwrites_existing_input() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sounds")).unwrap();
        let input = dir.path().join("guitar.mp3");
        fs::write(&input, [0x49u8, 0x44, 0x33]).unwrap();

        let config = EmbedConfig::default()
            .with_input(&input)
            .with_output(dir.path().join("sounds").join("..").join(".").join("guitar.mp3"));
        assert_eq!(error_codes(&config), vec![ErrorCode::OutputOverwritesInput]);

        let sibling = config.clone().with_output(dir.path().join("guitar_mp3_data.c"));
        assert!(validate_config(&sibling).is_ok());
    }

    #[test]
    fn test_same_file_lexical() {
        assert!(same_file(Path::new("a/b.c"), Path::new("a/./x/../b.c")));
        assert!(!same_file(Path::new("a/b.c"), Path::new("b.c")));
        assert_eq!(normalize_lexically(Path::new("../x/./y/..")), PathBuf::from("../x"));
    }

    #[test]
    fn test_non_c_output_warns() {
        let config = EmbedConfig::default().with_output("guitar_mp3_data.h");
        let result = validate_config(&config);
        assert!(result.is_ok());
        assert_eq!(
            result.warnings[0].code,
            WarningCode::UnexpectedOutputExtension
        );
    }
}

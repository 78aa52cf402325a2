//! Configuration validation.

use axsid_protocols::NodeField;

use crate::error::ConfigError;
use crate::schema::{Config, TreeFormat};

/// Page sizes above this are accepted but flagged.
const LARGE_MAX_NODES: usize = 100_000;

/// Safety multiples above this are accepted but flagged.
const LARGE_SAFETY_MULTIPLE: usize = 1_000;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// First error as a [`ConfigError`], if any.
    pub fn into_error(self) -> Option<ConfigError> {
        self.errors.into_iter().next().map(|e| ConfigError::InvalidValue {
            field: e.path,
            message: e.message,
        })
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_engine(config, &mut result);
        Self::validate_provider(config, &mut result);
        Self::validate_logging(config, &mut result);

        Ok(result)
    }

    fn validate_engine(config: &Config, result: &mut ValidationResult) {
        let engine = &config.engine;
        let limits = [
            ("engine.default_max_nodes", engine.default_max_nodes),
            ("engine.default_query_max", engine.default_query_max),
            ("engine.safety_multiple", engine.safety_multiple),
            ("engine.snippet_max_chars", engine.snippet_max_chars),
        ];
        for (path, value) in limits {
            if value == 0 {
                result.add_error(ValidationError::new(path, "must be at least 1"));
            }
        }

        if engine.default_max_nodes > LARGE_MAX_NODES {
            result.add_warning(ValidationWarning::new(
                "engine.default_max_nodes",
                format!(
                    "default_max_nodes is very high (>{}), snapshots may be large",
                    LARGE_MAX_NODES
                ),
            ));
        }

        if engine.safety_multiple > LARGE_SAFETY_MULTIPLE {
            result.add_warning(ValidationWarning::new(
                "engine.safety_multiple",
                "safety_multiple is very high, traversal is effectively unbounded",
            ));
        }

        for name in &engine.default_fields {
            if NodeField::parse(name).is_none() {
                result.add_error(ValidationError::new(
                    "engine.default_fields",
                    format!("Unknown field '{}'", name),
                ));
            }
        }
    }

    fn validate_provider(config: &Config, result: &mut ValidationResult) {
        if config.provider.frame_id.trim().is_empty() {
            result.add_error(ValidationError::new(
                "provider.frame_id",
                "frame_id cannot be empty",
            ));
        }

        if let Some(path) = &config.provider.tree_path {
            if path.trim().is_empty() {
                result.add_error(ValidationError::new(
                    "provider.tree_path",
                    "tree_path cannot be empty when set",
                ));
            }
        }
        if let Some(path) = &config.provider.bounds_path {
            if path.trim().is_empty() {
                result.add_error(ValidationError::new(
                    "provider.bounds_path",
                    "bounds_path cannot be empty when set",
                ));
            } else if config.provider.format != TreeFormat::Cdp {
                result.add_warning(ValidationWarning::new(
                    "provider.bounds_path",
                    "bounds_path is only read for cdp trees",
                ));
            }
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.trim();
        // Directives such as `axsid_core=debug` are left to the filter parser.
        let is_directive = level.contains('=') || level.contains(',');
        if !is_directive && !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            result.add_error(ValidationError::new(
                "logging.level",
                format!(
                    "Unknown log level '{}', valid values: {:?}",
                    config.logging.level, LOG_LEVELS
                ),
            ));
        }

        if let Some(dir) = &config.logging.dir {
            if dir.is_file() {
                result.add_error(ValidationError::new(
                    "logging.dir",
                    format!("Log directory is a file: {:?}", dir),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

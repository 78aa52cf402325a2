//! `validate-config` command.

use std::path::PathBuf;

use axsid_config::{Config, ConfigValidator};

pub(crate) fn validate(path: &Option<PathBuf>, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let source = path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<defaults>".to_string());
    let result = ConfigValidator::validate(config)?;

    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.path, error.message);
    }

    if let Some(err) = result.into_error() {
        return Err(format!("{} is invalid: {}", source, err).into());
    }
    println!("{} is valid", source);
    Ok(())
}

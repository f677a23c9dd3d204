//! Configuration validation.

use crate::schema::Config;

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
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();
        Self::validate_cdp(config, &mut result);
        Self::validate_limits(config, &mut result);
        result
    }

    fn validate_cdp(config: &Config, result: &mut ValidationResult) {
        let endpoint = &config.cdp.endpoint;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            result.add_error(ValidationError::new(
                "cdp.endpoint",
                "endpoint must be an http(s) URL, e.g. http://127.0.0.1:9222",
            ));
        }

        if config.cdp.request_timeout_secs == 0 {
            result.add_error(ValidationError::new(
                "cdp.request_timeout_secs",
                "request_timeout_secs must be greater than 0",
            ));
        }
    }

    fn validate_limits(config: &Config, result: &mut ValidationResult) {
        let limits = &config.limits;
        let required = [
            ("limits.max_nodes", limits.max_nodes),
            ("limits.export_max_nodes", limits.export_max_nodes),
            ("limits.ancestor_max_steps", limits.ancestor_max_steps),
            ("limits.max_owners", limits.max_owners),
        ];
        for (path, value) in required {
            if value == 0 {
                result.add_error(ValidationError::new(path, "must be greater than 0"));
            }
        }

        if limits.max_nodes > limits.export_max_nodes {
            result.add_warning(ValidationWarning::new(
                "limits.max_nodes",
                "max_nodes exceeds export_max_nodes; listings are capped by the export",
            ));
        }

        if limits.serialize_depth > 10 {
            result.add_warning(ValidationWarning::new(
                "limits.serialize_depth",
                "serialize_depth above 10 produces very large payloads",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

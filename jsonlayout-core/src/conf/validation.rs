use crate::conf::{ConfigError, ValidationErrors};
use serde_json::{Map, Value};
use std::collections::HashMap;

#[derive(Default)]
pub(crate) struct ValidationCtx {
    errors: Vec<ConfigError>,
}

impl ValidationCtx {
    pub fn push(&mut self, err: ConfigError) {
        self.errors.push(err);
    }

    /// Records the error of `result`, keeping its value otherwise.
    pub fn check<T>(&mut self, result: Result<T, ConfigError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }

    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation {
                validation_errors: ValidationErrors(self.errors),
            })
        }
    }
}

pub(crate) fn validate_custom_field_names(
    names: &HashMap<String, String>,
    ctx: &mut ValidationCtx,
) {
    for (field, name) in names {
        if name.trim().is_empty() {
            ctx.push(ConfigError::InvalidFieldName {
                field: field.clone(),
                reason: "replacement name must not be empty".to_string(),
            });
        }
    }
}

/// Additional fields are static scalars.
pub(crate) fn validate_additional_fields(fields: &Map<String, Value>, ctx: &mut ValidationCtx) {
    for (name, value) in fields {
        if name.trim().is_empty() {
            ctx.push(ConfigError::InvalidAdditionalField {
                name: name.clone(),
                reason: "name must not be empty".to_string(),
            });
        }

        if value.is_array() || value.is_object() {
            ctx.push(ConfigError::InvalidAdditionalField {
                name: name.clone(),
                reason: "value must be a string, number, boolean or null".to_string(),
            });
        }
    }
}

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    #[error("{path} defines neither event_layout nor access_layout")]
    NoLayouts { path: PathBuf },

    //-------------------------------------------------------------------------
    // Attributes
    //-------------------------------------------------------------------------
    #[error("unknown {kind} attribute '{name}'")]
    UnknownAttribute { kind: &'static str, name: String },

    //-------------------------------------------------------------------------
    // Timestamps
    //-------------------------------------------------------------------------
    #[error("invalid timestamp format '{pattern}': {reason}")]
    InvalidTimestampPattern { pattern: String, reason: String },

    #[error("invalid time zone '{zone}'")]
    InvalidTimeZone { zone: String },

    //-------------------------------------------------------------------------
    // Field names
    //-------------------------------------------------------------------------
    #[error("invalid custom name for field '{field}': {reason}")]
    InvalidFieldName { field: String, reason: String },

    #[error("invalid additional field '{name}': {reason}")]
    InvalidAdditionalField { name: String, reason: String },

    //-------------------------------------------------------------------------
    // Lifecycle
    //-------------------------------------------------------------------------
    #[error("throwable converter failed to start: {reason}")]
    ConverterStart { reason: String },

    //-------------------------------------------------------------------------
    // Aggregate
    //-------------------------------------------------------------------------
    #[error("config validation failed: {validation_errors}")]
    Validation { validation_errors: ValidationErrors },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Every semantic problem found in one configuration.
#[derive(Debug)]
pub struct ValidationErrors(pub Vec<ConfigError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

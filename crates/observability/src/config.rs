//! Logging configuration, read from the environment.
//!
//! - `RUST_LOG`: filter directives (default `info`).
//! - `CURIO_LOG_FORMAT`: `json` (default) or `pretty`.

pub const LOG_FORMAT_VAR: &str = "CURIO_LOG_FORMAT";
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Parse a format name; `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" | "text" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
    pub format: LogFormat,
    /// Set when `CURIO_LOG_FORMAT` held something unrecognized; reported once
    /// the subscriber is up.
    pub rejected_format: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            default_filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_format_var(std::env::var(LOG_FORMAT_VAR).ok().as_deref())
    }

    fn from_format_var(raw: Option<&str>) -> Self {
        match raw {
            None => Self::default(),
            Some(value) => match LogFormat::parse(value) {
                Some(format) => Self {
                    format,
                    ..Self::default()
                },
                None => Self {
                    rejected_format: Some(value.to_string()),
                    ..Self::default()
                },
            },
        }
    }
}

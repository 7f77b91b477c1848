//! Startup errors

/// Rejected tuning values. Raised once at construction, never during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// A value that must be strictly positive was zero, negative or not finite
    NonPositive { field: &'static str, value: f32 },
    /// A value fell outside its allowed closed range
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    /// A tick interval or count of zero
    Zero { field: &'static str },
    /// Tuning text could not be parsed
    Parse(String),
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive and finite (got {value})")
            }
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} must be within [{min}, {max}] (got {value})"),
            Self::Zero { field } => write!(f, "{field} must be at least 1"),
            Self::Parse(m) => write!(f, "invalid tuning: {m}"),
        }
    }
}

impl std::error::Error for TuningError {}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

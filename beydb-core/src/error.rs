use thiserror::Error;

/// Errors produced when turning user-entered text into domain values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Not one of the five part categories
    #[error("unknown part type: '{0}'")]
    UnknownPartType(String),

    /// Not one of Attack, Defense, Stamina, Balance
    #[error("unknown Beyblade type: '{0}'")]
    UnknownBeybladeType(String),

    /// Weight that is not a finite, non-negative number
    #[error("invalid weight: '{0}'")]
    InvalidWeight(String),

    /// Battle date in neither accepted format
    #[error("invalid date: '{0}' (expected YYYY-MM-DD HH:MM:SS)")]
    InvalidDate(String),

    /// Required free-text field left blank
    #[error("{0} cannot be empty")]
    MissingField(String),

    /// Identifier that is not an integer
    #[error("invalid {field}: '{value}' is not a number")]
    InvalidId { field: String, value: String },
}

impl ParseError {
    pub fn invalid_id(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidId {
            field: field.into(),
            value: value.into(),
        }
    }
}

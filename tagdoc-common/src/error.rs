use thiserror::Error;

/// Failure to parse a category label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("unknown category: {0}")]
    Unknown(String),
}

/// Failure to apply a value to a preview field.
///
/// These never reach the user: the detail state logs them and keeps the
/// previous value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("the {variant} preview has no field `{field}`")]
    UnknownField {
        variant: &'static str,
        field: String,
    },
    #[error("field `{field}` expects {expected}")]
    WrongShape {
        field: &'static str,
        expected: &'static str,
    },
    #[error("`{value}` is not a valid option for `{field}`")]
    InvalidChoice { field: &'static str, value: String },
    #[error("`{0}` is not a number")]
    NotANumber(String),
}

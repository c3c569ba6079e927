// Error types for zenum

use crate::value::Value;
use thiserror::Error;

/// Errors raised while discovering variants or selecting values
#[derive(Debug, Error)]
pub enum EnumError {
    /// The candidate matched none of the variant's constants
    #[error("Unknown value '{value}' ({kind}) for {variant}", kind = .value.kind())]
    UnknownValue { variant: String, value: Value },

    #[error("Unknown constant name '{name}' for {variant}")]
    UnknownName { variant: String, name: String },

    /// A single level declared the same constant name twice
    #[error("Duplicate constant name '{name}' declared by {variant}")]
    DuplicateName { variant: String, name: String },

    /// NaN equals nothing, so a NaN constant could never be selected
    #[error("Constant '{name}' declared by {variant} is NaN")]
    NanConstant { variant: String, name: String },

    #[error("Inheritance chain of {variant} loops back on itself")]
    CyclicLineage { variant: String },

    #[error("Unknown variant: {name}")]
    UnknownVariant { name: String },

    #[error("Duplicate variant declaration: {name}")]
    DuplicateVariant { name: String },

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EnumError>;

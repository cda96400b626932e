use crate::dimension::Dimension;
use thiserror::Error;

pub type UnitResult<T> = Result<T, UnitError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Unknown unit symbol '{symbol}'")]
    UnknownUnit { symbol: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid scale factor {factor} for unit '{symbol}'")]
    InvalidScale { symbol: String, factor: f64 },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Incompatible dimensions: '{from}' ({from_dim}) cannot convert to '{to}' ({to_dim})")]
    IncompatibleDimensions {
        from: String,
        to: String,
        from_dim: Dimension,
        to_dim: Dimension,
    },
}

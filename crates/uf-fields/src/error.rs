//! Field declaration and access errors.

use thiserror::Error;
use uf_core::{Unit, UnitError};

/// Result type for field operations.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors raised while declaring record fields or accessing their values.
///
/// None of these are retried anywhere: each one reflects either an
/// authoring mistake (wrong field name, clashing declaration) or a genuine
/// data-compatibility violation that the caller has to fix.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Incoming value carries a unit whose dimension does not match the
    /// field's canonical unit.
    #[error("Unit of attribute '{attribute}' must be equivalent to '{expected}'. Found '{found}'.")]
    IncompatibleUnit {
        attribute: &'static str,
        expected: Unit,
        found: Unit,
    },

    /// Name is not a unit-bearing field of the record type.
    #[error("'{name}' is not a unit-bearing attribute of {class}")]
    UnknownField { class: &'static str, name: String },

    /// The record type never declared any unit fields.
    #[error("{class} has no unit attributes declared")]
    UndeclaredClass { class: &'static str },

    /// Two fields with the same name in one declaration.
    #[error("duplicate unit attribute '{name}' on {class}")]
    DuplicateField {
        class: &'static str,
        name: &'static str,
    },

    /// A field was declared under the accessor's reserved name.
    #[error("attribute '{name}' on {class} collides with the accessor name")]
    AccessorClash {
        class: &'static str,
        name: &'static str,
    },

    /// Unit conversion failed while projecting a field.
    ///
    /// Unreachable after a successful coercion, since coercion already
    /// checked dimensional compatibility.
    #[error("cannot convert attribute '{attribute}': {source}")]
    Conversion {
        attribute: &'static str,
        source: UnitError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use uf_core::{gram, kiloparsec};

    #[test]
    fn incompatible_unit_message_shape() {
        let err = FieldError::IncompatibleUnit {
            attribute: "x",
            expected: kiloparsec(),
            found: gram(),
        };
        assert_eq!(
            err.to_string(),
            "Unit of attribute 'x' must be equivalent to 'kpc'. Found 'g'."
        );
    }

    #[test]
    fn unknown_field_names_the_field() {
        let err = FieldError::UnknownField {
            class: "Galaxy",
            name: "notes".to_string(),
        };
        assert!(err.to_string().contains("'notes'"));
        assert!(err.to_string().contains("Galaxy"));
    }
}

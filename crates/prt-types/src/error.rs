//! Errors reported by type construction and boundary conversion.

use crate::{ForeignSlot, TypeKind, TypeTag};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// A node failed the validity check or its slot count disagrees with its arity.
    #[error("invalid type expression: malformed {kind} node")]
    InvalidTypeExpression { kind: TypeKind },

    /// A non-primitive kind was passed where a primitive was expected.
    #[error("expected a primitive type kind, got {0}")]
    InvalidPrimitiveKind(TypeKind),

    /// A foreign type is missing one of its four capabilities.
    #[error("foreign type {tag} has no {slot} capability")]
    InvalidForeignDescriptor { tag: TypeTag, slot: ForeignSlot },

    #[error("invalid tuple arity {0} (must be positive)")]
    InvalidArity(usize),

    #[error("field index {index} out of range for arity {arity}")]
    InvalidFieldIndex { index: usize, arity: usize },

    /// Empty, or at least `MAX_FIELD_NAME_LENGTH` bytes long.
    #[error("invalid field name {0:?}")]
    InvalidFieldName(String),

    #[error("field {index} has no type assigned")]
    UnsetFieldType { index: usize },

    #[error("field {index} has no name assigned")]
    UnsetFieldName { index: usize },

    /// A boundary descriptor nests deeper than `MAX_NESTING_DEPTH`.
    #[error("type descriptor nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

pub type TypeResult<T> = Result<T, TypeError>;

//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Type, TypeKind, TypeResult};

/// Unwrap a construction that the caller guarantees to be well-formed.
pub(crate) fn ensure_built(built: TypeResult<Type>, kind: TypeKind) -> Type {
    built.unwrap_or_else(|err| panic!("cannot construct {kind} type: {err}"))
}

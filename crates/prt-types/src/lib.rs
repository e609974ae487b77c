#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Structural type system for the state-machine runtime.
//!
//! Types classify the values exchanged between machines: primitives
//! (`any`, `bool`, `event`, `machine`, `int`, `null`), foreign types, maps,
//! sequences, tuples and named tuples.
//!
//! - **Construction**: [`Type`] constructors, [`TupleBuilder`], [`NamedTupleBuilder`]
//! - **Subtyping**: [`is_subtype`], traced via [`is_subtype_traced`]
//! - **Foreign types**: [`ForeignOps`], [`ForeignFns`], and the built-in absent type
//! - **Boundary**: [`RawType`] descriptors, [`is_valid_type`], `Type::try_from`
//!
//! Types are owned trees. `Clone` is a deep copy, dropping a type frees it,
//! and a built type is immutable and `Send + Sync`.

mod absent;
mod builder;
mod error;
mod foreign;
mod invariants;
mod kind;
mod raw;
mod subtype;
mod tag;
mod trace;
mod ty;

#[cfg(test)]
mod absent_tests;
#[cfg(test)]
mod foreign_tests;
#[cfg(test)]
mod lib_tests;

pub use absent::AbsentOps;
pub use builder::{NamedTupleBuilder, TupleBuilder};
pub use error::{TypeError, TypeResult};
pub use foreign::{
    CloneFn, EqualsFn, ForeignFns, ForeignOps, ForeignSlot, ForeignType, ForeignValue, FreeFn,
    HashFn,
};
pub use kind::TypeKind;
pub use raw::{MAX_NESTING_DEPTH, RawForeign, RawType, is_valid_type};
pub use subtype::{is_subtype, is_subtype_traced};
pub use tag::{TypeTag, is_absent_tag};
pub use trace::{
    Colors, Mismatch, NoopTracer, PrintTracer, SubtypeTracer, TraceConfig, Verbosity,
};
pub use ty::{
    FieldName, MAX_FIELD_NAME_LENGTH, MapType, NamedField, NamedTupleType, SeqType, TupleType,
    Type,
};

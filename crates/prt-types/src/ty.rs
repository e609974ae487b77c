//! Type nodes.
//!
//! A [`Type`] is an owned tree: every payload edge is the sole owner of its
//! child, so dropping a node drops each descendant exactly once and no node is
//! ever shared between two trees. Storing operations take their arguments by
//! value; callers that want to keep a type pass a clone.
//!
//! Payload fields are private. Tuples and named tuples are produced by
//! [`crate::TupleBuilder`] and [`crate::NamedTupleBuilder`] (or the panicking
//! shorthands below), so a partially filled tuple is never observable as a
//! `Type`.

use std::fmt;
use std::sync::Arc;

use crate::invariants::ensure_built;
use crate::{
    CloneFn, EqualsFn, ForeignFns, ForeignOps, ForeignType, FreeFn, HashFn, NamedTupleBuilder,
    TupleBuilder, TypeError, TypeKind, TypeResult, TypeTag,
};

/// Exclusive upper bound on a field name's length in bytes.
pub const MAX_FIELD_NAME_LENGTH: usize = 256;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    Any,
    Bool,
    Event,
    Machine,
    Int,
    Null,
    Foreign(ForeignType),
    Map(MapType),
    Seq(SeqType),
    Tuple(TupleType),
    NamedTuple(NamedTupleType),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapType {
    domain: Box<Type>,
    codomain: Box<Type>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqType {
    inner: Box<Type>,
}

/// Positional tuple. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TupleType {
    fields: Box<[Type]>,
}

/// Tuple with named fields. Field order is significant. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedTupleType {
    fields: Box<[NamedField]>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedField {
    pub name: FieldName,
    pub ty: Type,
}

/// A non-empty field name shorter than [`MAX_FIELD_NAME_LENGTH`] bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldName(Box<str>);

impl FieldName {
    pub fn new(name: &str) -> TypeResult<Self> {
        if name.is_empty() || name.len() >= MAX_FIELD_NAME_LENGTH {
            return Err(TypeError::InvalidFieldName(name.to_owned()));
        }
        Ok(Self(name.into()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Type {
    /// Construct a payload-free primitive.
    pub fn primitive(kind: TypeKind) -> TypeResult<Self> {
        Ok(match kind {
            TypeKind::Any => Self::Any,
            TypeKind::Bool => Self::Bool,
            TypeKind::Event => Self::Event,
            TypeKind::Machine => Self::Machine,
            TypeKind::Int => Self::Int,
            TypeKind::Null => Self::Null,
            _ => return Err(TypeError::InvalidPrimitiveKind(kind)),
        })
    }

    pub fn foreign(tag: TypeTag, ops: Arc<dyn ForeignOps>) -> Self {
        Self::Foreign(ForeignType::new(tag, ops))
    }

    /// Construct a foreign type from four plain capability functions.
    pub fn foreign_from_fns(
        tag: TypeTag,
        clone: Option<CloneFn>,
        free: Option<FreeFn>,
        hash: Option<HashFn>,
        equals: Option<EqualsFn>,
    ) -> TypeResult<Self> {
        let fns = ForeignFns::new(tag, clone, free, hash, equals)?;
        Ok(Self::foreign(tag, Arc::new(fns)))
    }

    pub fn map(domain: Type, codomain: Type) -> Self {
        Self::Map(MapType {
            domain: Box::new(domain),
            codomain: Box::new(codomain),
        })
    }

    pub fn seq(inner: Type) -> Self {
        Self::Seq(SeqType {
            inner: Box::new(inner),
        })
    }

    /// Positional tuple of `fields`.
    ///
    /// # Panics
    /// Panics if `fields` is empty.
    pub fn tuple(fields: impl IntoIterator<Item = Type>) -> Self {
        let fields: Vec<Type> = fields.into_iter().collect();
        let built = TupleBuilder::new(fields.len()).and_then(|mut builder| {
            for (index, ty) in fields.into_iter().enumerate() {
                builder.set_field(index, ty)?;
            }
            builder.build()
        });
        ensure_built(built, TypeKind::Tuple)
    }

    /// Named tuple of `(name, type)` pairs, in order.
    ///
    /// # Panics
    /// Panics if `fields` is empty or any name is invalid.
    pub fn named_tuple<'a>(fields: impl IntoIterator<Item = (&'a str, Type)>) -> Self {
        let fields: Vec<(&str, Type)> = fields.into_iter().collect();
        let built = NamedTupleBuilder::new(fields.len()).and_then(|mut builder| {
            for (index, (name, ty)) in fields.into_iter().enumerate() {
                builder.set_field_name(index, name)?;
                builder.set_field(index, ty)?;
            }
            builder.build()
        });
        ensure_built(built, TypeKind::NamedTuple)
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Any => TypeKind::Any,
            Self::Bool => TypeKind::Bool,
            Self::Event => TypeKind::Event,
            Self::Machine => TypeKind::Machine,
            Self::Int => TypeKind::Int,
            Self::Null => TypeKind::Null,
            Self::Foreign(_) => TypeKind::Foreign,
            Self::Map(_) => TypeKind::Map,
            Self::Seq(_) => TypeKind::Seq,
            Self::Tuple(_) => TypeKind::Tuple,
            Self::NamedTuple(_) => TypeKind::NamedTuple,
        }
    }

    /// Always true: payloads cannot be missing from a built type.
    ///
    /// Unchecked descriptors are validated with [`crate::is_valid_type`].
    pub fn is_valid(&self) -> bool {
        true
    }

    /// Destroy this type and every node it owns.
    pub fn free(self) {
        drop(self);
    }
}

impl MapType {
    #[inline]
    pub fn domain(&self) -> &Type {
        &self.domain
    }

    #[inline]
    pub fn codomain(&self) -> &Type {
        &self.codomain
    }
}

impl SeqType {
    #[inline]
    pub fn inner(&self) -> &Type {
        &self.inner
    }
}

impl TupleType {
    pub(crate) fn from_fields(fields: Box<[Type]>) -> Self {
        debug_assert!(!fields.is_empty());
        Self { fields }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn fields(&self) -> &[Type] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&Type> {
        self.fields.get(index)
    }
}

impl NamedTupleType {
    pub(crate) fn from_fields(fields: Box<[NamedField]>) -> Self {
        debug_assert!(!fields.is_empty());
        Self { fields }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn fields(&self) -> &[NamedField] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Look up a field type by name (first match).
    pub fn field_type(&self, name: &str) -> Option<&Type> {
        self.fields
            .iter()
            .find(|f| f.name.as_str() == name)
            .map(|f| &f.ty)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Foreign(foreign) if foreign.is_absent() => f.write_str("absent"),
            Self::Foreign(foreign) => write!(f, "foreign({})", foreign.tag()),
            Self::Map(map) => write!(f, "map[{}, {}]", map.domain, map.codomain),
            Self::Seq(seq) => write!(f, "seq[{}]", seq.inner),
            Self::Tuple(tuple) => {
                f.write_str("(")?;
                for (i, ty) in tuple.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{ty}")?;
                }
                if tuple.arity() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Self::NamedTuple(tuple) => {
                f.write_str("(")?;
                for (i, field) in tuple.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.ty)?;
                }
                f.write_str(")")
            }
            primitive => f.write_str(primitive.kind().name()),
        }
    }
}

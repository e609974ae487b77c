//! Unchecked type descriptors.
//!
//! `RawType` is the shape in which externally produced type descriptors
//! arrive: any payload reference or slot may be missing. Two checks exist:
//!
//! - [`is_valid_type`] is the cheap, one-level sanity check. It looks only at
//!   the node itself and never descends into children.
//! - `Type::try_from(raw)` converts the whole tree, reporting the first
//!   violation as a [`TypeError`]. Descriptors nested deeper than
//!   [`MAX_NESTING_DEPTH`] are rejected before the recursion can exhaust the
//!   stack.

use std::sync::Arc;

use crate::{
    CloneFn, EqualsFn, ForeignFns, FreeFn, HashFn, NamedTupleBuilder, TupleBuilder, Type,
    TypeError, TypeKind, TypeResult, TypeTag,
};

#[derive(Clone, Debug)]
pub enum RawType {
    Any,
    Bool,
    Event,
    Machine,
    Int,
    Null,
    Foreign(Option<RawForeign>),
    Map {
        domain: Option<Box<RawType>>,
        codomain: Option<Box<RawType>>,
    },
    Seq {
        inner: Option<Box<RawType>>,
    },
    Tuple {
        arity: usize,
        fields: Option<Vec<Option<RawType>>>,
    },
    NamedTuple {
        arity: usize,
        names: Option<Vec<Option<String>>>,
        fields: Option<Vec<Option<RawType>>>,
    },
}

/// Foreign descriptor with possibly missing capability functions.
#[derive(Clone, Copy, Debug)]
pub struct RawForeign {
    pub tag: TypeTag,
    pub clone: Option<CloneFn>,
    pub free: Option<FreeFn>,
    pub hash: Option<HashFn>,
    pub equals: Option<EqualsFn>,
}

/// Deepest node level `Type::try_from` accepts; the root is level 0.
pub const MAX_NESTING_DEPTH: usize = 256;

/// One-level validity check. `None` (a missing node) is invalid.
pub fn is_valid_type(raw: Option<&RawType>) -> bool {
    raw.is_some_and(RawType::is_valid)
}

impl RawType {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Any => TypeKind::Any,
            Self::Bool => TypeKind::Bool,
            Self::Event => TypeKind::Event,
            Self::Machine => TypeKind::Machine,
            Self::Int => TypeKind::Int,
            Self::Null => TypeKind::Null,
            Self::Foreign(_) => TypeKind::Foreign,
            Self::Map { .. } => TypeKind::Map,
            Self::Seq { .. } => TypeKind::Seq,
            Self::Tuple { .. } => TypeKind::Tuple,
            Self::NamedTuple { .. } => TypeKind::NamedTuple,
        }
    }

    /// Whether this node's own payload is present. Children are not inspected.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Any | Self::Bool | Self::Event | Self::Machine | Self::Int | Self::Null => true,
            Self::Foreign(foreign) => foreign.is_some_and(|f| {
                f.clone.is_some() && f.free.is_some() && f.hash.is_some() && f.equals.is_some()
            }),
            Self::Map { domain, codomain } => domain.is_some() && codomain.is_some(),
            Self::Seq { inner } => inner.is_some(),
            Self::Tuple { arity, fields } => *arity > 0 && fields.is_some(),
            Self::NamedTuple {
                arity,
                names,
                fields,
            } => *arity > 0 && fields.is_some() && names.is_some(),
        }
    }
}

impl TryFrom<RawType> for Type {
    type Error = TypeError;

    fn try_from(raw: RawType) -> TypeResult<Type> {
        convert(raw, 0)
    }
}

fn convert(raw: RawType, depth: usize) -> TypeResult<Type> {
    if depth > MAX_NESTING_DEPTH {
        return Err(TypeError::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        });
    }
    let kind = raw.kind();
    let malformed = TypeError::InvalidTypeExpression { kind };
    let child = depth + 1;
    match raw {
        RawType::Any => Ok(Type::Any),
        RawType::Bool => Ok(Type::Bool),
        RawType::Event => Ok(Type::Event),
        RawType::Machine => Ok(Type::Machine),
        RawType::Int => Ok(Type::Int),
        RawType::Null => Ok(Type::Null),
        RawType::Foreign(foreign) => {
            let foreign = foreign.ok_or(malformed)?;
            let fns = ForeignFns::new(
                foreign.tag,
                foreign.clone,
                foreign.free,
                foreign.hash,
                foreign.equals,
            )?;
            Ok(Type::foreign(foreign.tag, Arc::new(fns)))
        }
        RawType::Map {
            domain: Some(domain),
            codomain: Some(codomain),
        } => Ok(Type::map(convert(*domain, child)?, convert(*codomain, child)?)),
        RawType::Seq { inner: Some(inner) } => Ok(Type::seq(convert(*inner, child)?)),
        RawType::Tuple {
            arity,
            fields: Some(fields),
        } if arity > 0 && fields.len() == arity => {
            let mut builder = TupleBuilder::new(arity)?;
            for (index, field) in fields.into_iter().enumerate() {
                let field = field.ok_or(TypeError::UnsetFieldType { index })?;
                builder.set_field(index, convert(field, child)?)?;
            }
            builder.build()
        }
        RawType::NamedTuple {
            arity,
            names: Some(names),
            fields: Some(fields),
        } if arity > 0 && names.len() == arity && fields.len() == arity => {
            let mut builder = NamedTupleBuilder::new(arity)?;
            for (index, name) in names.iter().enumerate() {
                let name = name.as_deref().ok_or(TypeError::UnsetFieldName { index })?;
                builder.set_field_name(index, name)?;
            }
            for (index, field) in fields.into_iter().enumerate() {
                let field = field.ok_or(TypeError::UnsetFieldType { index })?;
                builder.set_field(index, convert(field, child)?)?;
            }
            builder.build()
        }
        _ => Err(malformed),
    }
}

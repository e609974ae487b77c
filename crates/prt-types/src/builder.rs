//! Builders for tuple and named-tuple types.
//!
//! A builder owns one slot per field. Slots are filled by index in any order;
//! `build` yields the immutable [`Type`] only once every slot is set, so the
//! partially built state never escapes as a type.
//!
//! Setting a slot that is already filled replaces its value and drops the
//! previous one.

use crate::{FieldName, NamedField, NamedTupleType, TupleType, Type, TypeError, TypeResult};

#[derive(Clone, Debug)]
pub struct TupleBuilder {
    fields: Vec<Option<Type>>,
}

impl TupleBuilder {
    /// Start a tuple with `arity` unset field slots.
    pub fn new(arity: usize) -> TypeResult<Self> {
        if arity == 0 {
            return Err(TypeError::InvalidArity(arity));
        }
        Ok(Self {
            fields: vec![None; arity],
        })
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    pub fn set_field(&mut self, index: usize, ty: Type) -> TypeResult<&mut Self> {
        let arity = self.arity();
        let slot = self
            .fields
            .get_mut(index)
            .ok_or(TypeError::InvalidFieldIndex { index, arity })?;
        *slot = Some(ty);
        Ok(self)
    }

    /// Whether every field slot has been assigned.
    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(Option::is_some)
    }

    pub fn build(self) -> TypeResult<Type> {
        let fields = collect_slots(self.fields, |index| TypeError::UnsetFieldType { index })?;
        Ok(Type::Tuple(TupleType::from_fields(fields)))
    }
}

#[derive(Clone, Debug)]
pub struct NamedTupleBuilder {
    names: Vec<Option<FieldName>>,
    fields: Vec<Option<Type>>,
}

impl NamedTupleBuilder {
    /// Start a named tuple with `arity` unset name and field slots.
    pub fn new(arity: usize) -> TypeResult<Self> {
        if arity == 0 {
            return Err(TypeError::InvalidArity(arity));
        }
        Ok(Self {
            names: vec![None; arity],
            fields: vec![None; arity],
        })
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    pub fn set_field(&mut self, index: usize, ty: Type) -> TypeResult<&mut Self> {
        let arity = self.arity();
        let slot = self
            .fields
            .get_mut(index)
            .ok_or(TypeError::InvalidFieldIndex { index, arity })?;
        *slot = Some(ty);
        Ok(self)
    }

    /// Store a copy of `name` for field `index`.
    pub fn set_field_name(&mut self, index: usize, name: &str) -> TypeResult<&mut Self> {
        let arity = self.arity();
        let slot = self
            .names
            .get_mut(index)
            .ok_or(TypeError::InvalidFieldIndex { index, arity })?;
        *slot = Some(FieldName::new(name)?);
        Ok(self)
    }

    pub fn is_complete(&self) -> bool {
        self.names.iter().all(Option::is_some) && self.fields.iter().all(Option::is_some)
    }

    /// Names are checked before types, each in index order.
    pub fn build(self) -> TypeResult<Type> {
        let names = collect_slots(self.names, |index| TypeError::UnsetFieldName { index })?;
        let fields = collect_slots(self.fields, |index| TypeError::UnsetFieldType { index })?;
        let fields = names
            .into_iter()
            .zip(fields)
            .map(|(name, ty)| NamedField { name, ty })
            .collect();
        Ok(Type::NamedTuple(NamedTupleType::from_fields(fields)))
    }
}

fn collect_slots<T>(
    slots: Vec<Option<T>>,
    unset: impl Fn(usize) -> TypeError,
) -> TypeResult<Box<[T]>> {
    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or_else(|| unset(index)))
        .collect()
}

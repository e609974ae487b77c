//! Foreign types: the extension point for opaque, externally defined values.
//!
//! A foreign type is a 128-bit [`TypeTag`] plus a capability object that knows
//! how to clone, free, hash and compare values of that type. The type system
//! itself never looks inside foreign values; it only carries the capabilities
//! so the value layer can reach them.
//!
//! Providers either implement [`ForeignOps`] directly or hand over four plain
//! functions through [`ForeignFns`].

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::{TypeError, TypeResult, TypeTag};

/// Opaque handle to a foreign value. `None` is the absent value.
#[derive(Default)]
pub struct ForeignValue(Option<Box<dyn Any + Send + Sync>>);

impl ForeignValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Some(Box::new(value)))
    }

    /// The absent value.
    pub fn absent() -> Self {
        Self(None)
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_deref().and_then(|v| v.downcast_ref::<T>())
    }

    pub fn into_inner(self) -> Option<Box<dyn Any + Send + Sync>> {
        self.0
    }
}

impl fmt::Debug for ForeignValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str("ForeignValue(absent)"),
            Some(_) => f.write_str("ForeignValue(..)"),
        }
    }
}

/// Capabilities of a foreign type, operating on values carrying `tag`.
///
/// Implementations are stateless and shared process-wide; a type node only
/// holds a reference to them.
pub trait ForeignOps: Send + Sync {
    /// Produce an independent copy of `value`.
    fn clone_value(&self, tag: TypeTag, value: &ForeignValue) -> ForeignValue;

    /// Release `value`.
    fn free_value(&self, tag: TypeTag, value: ForeignValue);

    fn hash_value(&self, tag: TypeTag, value: &ForeignValue) -> u32;

    /// Compare two foreign values, possibly of different foreign types.
    fn values_equal(
        &self,
        tag1: TypeTag,
        value1: &ForeignValue,
        tag2: TypeTag,
        value2: &ForeignValue,
    ) -> bool;
}

pub type CloneFn = fn(TypeTag, &ForeignValue) -> ForeignValue;
pub type FreeFn = fn(TypeTag, ForeignValue);
pub type HashFn = fn(TypeTag, &ForeignValue) -> u32;
pub type EqualsFn = fn(TypeTag, &ForeignValue, TypeTag, &ForeignValue) -> bool;

/// One of the four capability slots.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ForeignSlot {
    Clone,
    Free,
    Hash,
    Equals,
}

impl fmt::Display for ForeignSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clone => "clone",
            Self::Free => "free",
            Self::Hash => "hash",
            Self::Equals => "equals",
        })
    }
}

/// Capability table built from four plain functions.
#[derive(Clone, Copy, Debug)]
pub struct ForeignFns {
    clone: CloneFn,
    free: FreeFn,
    hash: HashFn,
    equals: EqualsFn,
}

impl ForeignFns {
    /// Assemble a table; every slot must be present.
    ///
    /// `tag` is only used to describe the failure.
    pub fn new(
        tag: TypeTag,
        clone: Option<CloneFn>,
        free: Option<FreeFn>,
        hash: Option<HashFn>,
        equals: Option<EqualsFn>,
    ) -> TypeResult<Self> {
        let missing = |slot| TypeError::InvalidForeignDescriptor { tag, slot };
        Ok(Self {
            clone: clone.ok_or_else(|| missing(ForeignSlot::Clone))?,
            free: free.ok_or_else(|| missing(ForeignSlot::Free))?,
            hash: hash.ok_or_else(|| missing(ForeignSlot::Hash))?,
            equals: equals.ok_or_else(|| missing(ForeignSlot::Equals))?,
        })
    }
}

impl ForeignOps for ForeignFns {
    fn clone_value(&self, tag: TypeTag, value: &ForeignValue) -> ForeignValue {
        (self.clone)(tag, value)
    }

    fn free_value(&self, tag: TypeTag, value: ForeignValue) {
        (self.free)(tag, value)
    }

    fn hash_value(&self, tag: TypeTag, value: &ForeignValue) -> u32 {
        (self.hash)(tag, value)
    }

    fn values_equal(
        &self,
        tag1: TypeTag,
        value1: &ForeignValue,
        tag2: TypeTag,
        value2: &ForeignValue,
    ) -> bool {
        (self.equals)(tag1, value1, tag2, value2)
    }
}

/// Payload of a foreign type node.
///
/// Cloning copies the tag and shares the capability object; the foreign
/// `clone` capability is never invoked for type nodes.
#[derive(Clone)]
pub struct ForeignType {
    tag: TypeTag,
    ops: Arc<dyn ForeignOps>,
}

impl ForeignType {
    pub fn new(tag: TypeTag, ops: Arc<dyn ForeignOps>) -> Self {
        Self { tag, ops }
    }

    #[inline]
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        self.tag.is_absent()
    }

    pub fn ops(&self) -> &Arc<dyn ForeignOps> {
        &self.ops
    }

    pub fn clone_value(&self, value: &ForeignValue) -> ForeignValue {
        self.ops.clone_value(self.tag, value)
    }

    pub fn free_value(&self, value: ForeignValue) {
        self.ops.free_value(self.tag, value)
    }

    pub fn hash_value(&self, value: &ForeignValue) -> u32 {
        self.ops.hash_value(self.tag, value)
    }

    /// Compare `value` (of this type) against a value of type `other_tag`.
    pub fn values_equal(
        &self,
        value: &ForeignValue,
        other_tag: TypeTag,
        other: &ForeignValue,
    ) -> bool {
        self.ops.values_equal(self.tag, value, other_tag, other)
    }
}

/// Tags identify foreign types; capability objects are not compared.
impl PartialEq for ForeignType {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for ForeignType {}

impl fmt::Debug for ForeignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignType").field("tag", &self.tag).finish()
    }
}

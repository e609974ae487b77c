//! The built-in absent type.
//!
//! A foreign type with the reserved all-zero tag whose only value is the
//! absent value. The runtime uses it as a placeholder meaning "no foreign
//! value present".

use std::sync::Arc;

use crate::{ForeignOps, ForeignType, ForeignValue, Type, TypeTag};

/// Capabilities of the absent type.
#[derive(Clone, Copy, Debug, Default)]
pub struct AbsentOps;

impl ForeignOps for AbsentOps {
    fn clone_value(&self, tag: TypeTag, value: &ForeignValue) -> ForeignValue {
        ensure_absent(tag, value);
        ForeignValue::absent()
    }

    fn free_value(&self, tag: TypeTag, value: ForeignValue) {
        ensure_absent(tag, &value);
    }

    fn hash_value(&self, tag: TypeTag, value: &ForeignValue) -> u32 {
        ensure_absent(tag, value);
        0
    }

    fn values_equal(
        &self,
        tag1: TypeTag,
        value1: &ForeignValue,
        tag2: TypeTag,
        value2: &ForeignValue,
    ) -> bool {
        assert!(
            tag1.is_absent() || tag2.is_absent(),
            "absent equality called without an absent operand ({tag1}, {tag2})"
        );
        assert!(
            !tag1.is_absent() || value1.is_absent(),
            "absent-tagged operand carries a value"
        );
        assert!(
            !tag2.is_absent() || value2.is_absent(),
            "absent-tagged operand carries a value"
        );
        tag1.is_absent() && tag2.is_absent()
    }
}

fn ensure_absent(tag: TypeTag, value: &ForeignValue) {
    assert!(tag.is_absent(), "expected the absent type, got tag {tag}");
    assert!(value.is_absent(), "expected the absent value");
}

impl ForeignType {
    /// Payload of the absent type.
    pub fn absent() -> Self {
        Self::new(TypeTag::ABSENT, Arc::new(AbsentOps))
    }
}

impl Type {
    /// Construct the absent type.
    pub fn absent() -> Self {
        Type::Foreign(ForeignType::absent())
    }
}

use std::sync::Arc;

use crate::{
    ForeignFns, ForeignOps, ForeignSlot, ForeignType, ForeignValue, Type, TypeError, TypeKind,
    TypeTag,
};

const POINT: TypeTag = TypeTag::from_words([0x5049_4e54, 1, 2, 3]);

#[derive(Clone, Debug, PartialEq)]
struct Point(i32, i32);

fn point_clone(_tag: TypeTag, value: &ForeignValue) -> ForeignValue {
    let point = value.downcast_ref::<Point>().expect("point value");
    ForeignValue::new(point.clone())
}

fn point_free(_tag: TypeTag, value: ForeignValue) {
    drop(value);
}

fn point_hash(_tag: TypeTag, value: &ForeignValue) -> u32 {
    let point = value.downcast_ref::<Point>().expect("point value");
    (point.0 as u32).wrapping_mul(31).wrapping_add(point.1 as u32)
}

fn point_equals(tag1: TypeTag, v1: &ForeignValue, tag2: TypeTag, v2: &ForeignValue) -> bool {
    tag1 == tag2 && v1.downcast_ref::<Point>() == v2.downcast_ref::<Point>()
}

fn point_fns() -> ForeignFns {
    ForeignFns::new(
        POINT,
        Some(point_clone),
        Some(point_free),
        Some(point_hash),
        Some(point_equals),
    )
    .unwrap()
}

#[test]
fn foreign_type_forwards_capabilities_with_its_tag() {
    let foreign = ForeignType::new(POINT, Arc::new(point_fns()));
    let value = ForeignValue::new(Point(2, 5));

    let copy = foreign.clone_value(&value);
    assert_eq!(copy.downcast_ref::<Point>(), Some(&Point(2, 5)));
    assert_eq!(foreign.hash_value(&value), 2 * 31 + 5);
    assert!(foreign.values_equal(&value, POINT, &copy));
    assert!(!foreign.values_equal(&value, POINT, &ForeignValue::new(Point(0, 0))));
    foreign.free_value(copy);
}

#[test]
fn missing_slot_is_reported() {
    let cases = [
        (
            ForeignFns::new(POINT, None, Some(point_free), Some(point_hash), Some(point_equals)),
            ForeignSlot::Clone,
        ),
        (
            ForeignFns::new(POINT, Some(point_clone), None, Some(point_hash), Some(point_equals)),
            ForeignSlot::Free,
        ),
        (
            ForeignFns::new(POINT, Some(point_clone), Some(point_free), None, Some(point_equals)),
            ForeignSlot::Hash,
        ),
        (
            ForeignFns::new(POINT, Some(point_clone), Some(point_free), Some(point_hash), None),
            ForeignSlot::Equals,
        ),
    ];
    for (result, slot) in cases {
        assert_eq!(
            result.unwrap_err(),
            TypeError::InvalidForeignDescriptor { tag: POINT, slot }
        );
    }
}

#[test]
fn foreign_from_fns_builds_foreign_node() {
    let ty = Type::foreign_from_fns(
        POINT,
        Some(point_clone),
        Some(point_free),
        Some(point_hash),
        Some(point_equals),
    )
    .unwrap();
    assert_eq!(ty.kind(), TypeKind::Foreign);
    let Type::Foreign(foreign) = &ty else {
        panic!("expected foreign type");
    };
    assert_eq!(foreign.tag(), POINT);
    assert!(!foreign.is_absent());
}

#[test]
fn foreign_from_fns_rejects_missing_slot() {
    let err = Type::foreign_from_fns(POINT, Some(point_clone), None, None, None).unwrap_err();
    insta::assert_snapshot!(err, @"foreign type 50494e54-00000001-00000002-00000003 has no free capability");
}

#[test]
fn cloning_type_node_shares_capabilities_without_cloning_values() {
    struct Counting;

    static CLONES: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

    impl ForeignOps for Counting {
        fn clone_value(&self, _tag: TypeTag, _value: &ForeignValue) -> ForeignValue {
            CLONES.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            ForeignValue::absent()
        }
        fn free_value(&self, _tag: TypeTag, _value: ForeignValue) {}
        fn hash_value(&self, _tag: TypeTag, _value: &ForeignValue) -> u32 {
            0
        }
        fn values_equal(
            &self,
            _tag1: TypeTag,
            _value1: &ForeignValue,
            _tag2: TypeTag,
            _value2: &ForeignValue,
        ) -> bool {
            false
        }
    }

    let ty = Type::foreign(POINT, Arc::new(Counting));
    let copy = ty.clone();
    assert_eq!(ty, copy);
    assert_eq!(CLONES.load(std::sync::atomic::Ordering::SeqCst), 0);

    let (Type::Foreign(a), Type::Foreign(b)) = (&ty, &copy) else {
        panic!("expected foreign types");
    };
    assert!(Arc::ptr_eq(a.ops(), b.ops()));
}

#[test]
fn foreign_equality_compares_tags() {
    let a = Type::foreign(POINT, Arc::new(point_fns()));
    let b = Type::foreign(POINT, Arc::new(point_fns()));
    let other = Type::foreign(TypeTag::from_u128(99), Arc::new(point_fns()));
    assert_eq!(a, b);
    assert_ne!(a, other);
}

#[test]
fn foreign_value_absent_and_present() {
    assert!(ForeignValue::absent().is_absent());
    assert!(ForeignValue::default().is_absent());
    let value = ForeignValue::new(7_u64);
    assert!(!value.is_absent());
    assert_eq!(value.downcast_ref::<u64>(), Some(&7));
    assert_eq!(value.downcast_ref::<i32>(), None);
    assert!(value.into_inner().is_some());
}

#[test]
fn slot_display() {
    assert_eq!(ForeignSlot::Clone.to_string(), "clone");
    assert_eq!(ForeignSlot::Equals.to_string(), "equals");
}

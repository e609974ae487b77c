use crate::{AbsentOps, ForeignOps, ForeignValue, Type, TypeKind, TypeTag};

const OTHER: TypeTag = TypeTag::from_words([7, 0, 0, 0]);

#[test]
fn absent_type_is_foreign_with_zero_tag() {
    let ty = Type::absent();
    assert_eq!(ty.kind(), TypeKind::Foreign);
    let Type::Foreign(foreign) = &ty else {
        panic!("expected foreign type");
    };
    assert!(foreign.is_absent());
    assert_eq!(foreign.tag(), TypeTag::ABSENT);
}

#[test]
fn clone_returns_absent() {
    let ty = Type::absent();
    let Type::Foreign(foreign) = &ty else {
        panic!("expected foreign type");
    };
    let copy = foreign.clone_value(&ForeignValue::absent());
    assert!(copy.is_absent());
}

#[test]
fn hash_is_zero() {
    assert_eq!(AbsentOps.hash_value(TypeTag::ABSENT, &ForeignValue::absent()), 0);
}

#[test]
fn free_accepts_absent_value() {
    AbsentOps.free_value(TypeTag::ABSENT, ForeignValue::absent());
}

#[test]
fn equal_only_when_both_absent() {
    let absent = ForeignValue::absent();
    let other = ForeignValue::new(3_i64);
    assert!(AbsentOps.values_equal(TypeTag::ABSENT, &absent, TypeTag::ABSENT, &absent));
    assert!(!AbsentOps.values_equal(TypeTag::ABSENT, &absent, OTHER, &other));
    assert!(!AbsentOps.values_equal(OTHER, &other, TypeTag::ABSENT, &absent));
}

#[test]
#[should_panic(expected = "without an absent operand")]
fn equal_requires_an_absent_operand() {
    let a = ForeignValue::new(1_u8);
    let b = ForeignValue::new(2_u8);
    AbsentOps.values_equal(OTHER, &a, OTHER, &b);
}

#[test]
#[should_panic(expected = "absent-tagged operand carries a value")]
fn equal_rejects_present_value_under_absent_tag() {
    let present = ForeignValue::new(1_u8);
    AbsentOps.values_equal(TypeTag::ABSENT, &present, TypeTag::ABSENT, &ForeignValue::absent());
}

#[test]
#[should_panic(expected = "expected the absent value")]
fn clone_rejects_present_value() {
    AbsentOps.clone_value(TypeTag::ABSENT, &ForeignValue::new("x"));
}

#[test]
#[should_panic(expected = "expected the absent type")]
fn hash_rejects_foreign_tag() {
    AbsentOps.hash_value(OTHER, &ForeignValue::absent());
}

//! Properties that hold for every constructed type.

use std::sync::Arc;

use crate::{AbsentOps, Type, TypeTag, is_subtype};

fn corpus() -> Vec<Type> {
    let leaves = vec![
        Type::Any,
        Type::Bool,
        Type::Event,
        Type::Machine,
        Type::Int,
        Type::Null,
        Type::absent(),
        Type::foreign(TypeTag::from_u128(0x1234), Arc::new(AbsentOps)),
    ];
    let mut types = leaves.clone();
    for leaf in &leaves {
        types.push(Type::seq(leaf.clone()));
        types.push(Type::map(Type::Int, leaf.clone()));
        types.push(Type::tuple([leaf.clone(), Type::Null]));
        types.push(Type::named_tuple([("f", leaf.clone())]));
    }
    types.push(Type::map(
        Type::tuple([Type::Int, Type::Event]),
        Type::seq(Type::named_tuple([("a", Type::Machine), ("b", Type::seq(Type::Any))])),
    ));
    types
}

#[test]
fn subtyping_is_reflexive() {
    for ty in corpus() {
        assert!(is_subtype(&ty, &ty), "{ty} <: {ty}");
    }
}

#[test]
fn any_is_top() {
    for ty in corpus() {
        assert!(is_subtype(&ty, &Type::Any), "{ty} <: any");
    }
}

#[test]
fn subtyping_is_transitive_over_corpus() {
    let types = corpus();
    for a in &types {
        for b in &types {
            if !is_subtype(a, b) {
                continue;
            }
            for c in &types {
                if is_subtype(b, c) {
                    assert!(is_subtype(a, c), "{a} <: {b} <: {c}");
                }
            }
        }
    }
}

#[test]
fn clone_equals_original_and_survives_its_free() {
    for ty in corpus() {
        let copy = ty.clone();
        assert_eq!(copy, ty);
        copy.free();
        assert!(ty.is_valid());
        assert!(is_subtype(&ty, &ty));
    }
}

#[test]
fn clone_is_subtype_equivalent() {
    let types = corpus();
    for a in &types {
        let copy = a.clone();
        for b in &types {
            assert_eq!(is_subtype(&copy, b), is_subtype(a, b), "{a} vs {b}");
            assert_eq!(is_subtype(b, &copy), is_subtype(b, a), "{b} vs {a}");
        }
    }
}

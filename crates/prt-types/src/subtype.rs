//! Structural subtyping.
//!
//! The relation is purely structural and covariant everywhere; there are no
//! function types, so nothing is contravariant. Rules are keyed by the
//! supertype:
//!
//! | supertype              | subtype must be                                         |
//! |------------------------|---------------------------------------------------------|
//! | `any`                  | anything                                                |
//! | `null`/`event`/`machine` | the same kind, or `null`                              |
//! | `bool`/`int`/foreign   | the same kind (foreign tags are not compared)           |
//! | `map[K, V]`            | a map with covariant key and value types                |
//! | `seq[T]`               | a seq with covariant element type                       |
//! | tuple                  | a tuple of equal arity with covariant fields            |
//! | named tuple            | equal arity, identical names in order, covariant fields |

use crate::Type;
use crate::trace::{Mismatch, NoopTracer, SubtypeTracer};

/// Whether `sub` is a subtype of `sup`.
pub fn is_subtype(sub: &Type, sup: &Type) -> bool {
    is_subtype_traced(sub, sup, &mut NoopTracer)
}

/// [`is_subtype`] reporting every comparison to `tracer`.
pub fn is_subtype_traced<T: SubtypeTracer>(sub: &Type, sup: &Type, tracer: &mut T) -> bool {
    tracer.trace_enter(sub, sup);
    let result = compare(sub, sup, tracer);
    tracer.trace_exit(result);
    result
}

fn compare<T: SubtypeTracer>(sub: &Type, sup: &Type, tracer: &mut T) -> bool {
    match (sub, sup) {
        (_, Type::Any) => true,
        (Type::Null, _) if sup.kind().accepts_null() => true,
        (Type::Event, Type::Event) | (Type::Machine, Type::Machine) => true,
        (Type::Bool, Type::Bool) | (Type::Int, Type::Int) => true,
        (Type::Foreign(_), Type::Foreign(_)) => true,
        (Type::Map(sub_map), Type::Map(sup_map)) => {
            is_subtype_traced(sub_map.domain(), sup_map.domain(), tracer)
                && is_subtype_traced(sub_map.codomain(), sup_map.codomain(), tracer)
        }
        (Type::Seq(sub_seq), Type::Seq(sup_seq)) => {
            is_subtype_traced(sub_seq.inner(), sup_seq.inner(), tracer)
        }
        (Type::Tuple(sub_tuple), Type::Tuple(sup_tuple)) => {
            if sub_tuple.arity() != sup_tuple.arity() {
                tracer.trace_mismatch(Mismatch::Arity {
                    sub: sub_tuple.arity(),
                    sup: sup_tuple.arity(),
                });
                return false;
            }
            sub_tuple
                .fields()
                .iter()
                .zip(sup_tuple.fields())
                .all(|(sub_field, sup_field)| is_subtype_traced(sub_field, sup_field, tracer))
        }
        (Type::NamedTuple(sub_tuple), Type::NamedTuple(sup_tuple)) => {
            if sub_tuple.arity() != sup_tuple.arity() {
                tracer.trace_mismatch(Mismatch::Arity {
                    sub: sub_tuple.arity(),
                    sup: sup_tuple.arity(),
                });
                return false;
            }
            let names = sub_tuple.names().zip(sup_tuple.names()).enumerate();
            for (index, (sub_name, sup_name)) in names {
                if sub_name != sup_name {
                    tracer.trace_mismatch(Mismatch::FieldName {
                        index,
                        sub: sub_name,
                        sup: sup_name,
                    });
                    return false;
                }
            }
            sub_tuple
                .fields()
                .iter()
                .zip(sup_tuple.fields())
                .all(|(sub_field, sup_field)| {
                    is_subtype_traced(&sub_field.ty, &sup_field.ty, tracer)
                })
        }
        _ => {
            tracer.trace_mismatch(Mismatch::Kind {
                sub: sub.kind(),
                sup: sup.kind(),
            });
            false
        }
    }
}

impl Type {
    /// Whether `self` is a subtype of `sup`.
    pub fn is_subtype_of(&self, sup: &Type) -> bool {
        is_subtype(self, sup)
    }
}

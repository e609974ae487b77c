//! Type kind discriminator.
//!
//! Every type node carries exactly one kind, which selects its payload shape.

use std::fmt;

/// Semantic type kinds.
///
/// The first six kinds are primitive leaves without a payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum TypeKind {
    /// Top of the subtype lattice.
    Any = 0,
    Bool = 1,
    /// Event identifier exchanged between machines.
    Event = 2,
    /// Handle to a running state machine.
    Machine = 3,
    Int = 4,
    /// Bottom for the reference-like kinds (event, machine, null).
    Null = 5,
    /// Opaque, externally defined value kind.
    Foreign = 6,
    /// `map[K, V]` - read-only associative container.
    Map = 7,
    /// `seq[T]` - ordered sequence.
    Seq = 8,
    /// Positional tuple with fixed arity.
    Tuple = 9,
    /// Tuple with ordered, named fields.
    NamedTuple = 10,
}

impl TypeKind {
    /// Whether this kind is a payload-free leaf (any, bool, event, machine, int, null).
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Any | Self::Bool | Self::Event | Self::Machine | Self::Int | Self::Null
        )
    }

    /// Whether values of this kind may be replaced by `null` in a supertype position.
    pub fn accepts_null(self) -> bool {
        matches!(self, Self::Null | Self::Event | Self::Machine)
    }

    /// Lowercase name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Bool => "bool",
            Self::Event => "event",
            Self::Machine => "machine",
            Self::Int => "int",
            Self::Null => "null",
            Self::Foreign => "foreign",
            Self::Map => "map",
            Self::Seq => "seq",
            Self::Tuple => "tuple",
            Self::NamedTuple => "named tuple",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

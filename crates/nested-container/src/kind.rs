//! The kind tag of a [`Value`](crate::Value).

use std::fmt;

/// Which of the eight storage variants a value currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Null,
    Map,
    Sequence,
    String,
    Float,
    Integer,
    UnsignedInteger,
    Boolean,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 8] = [
        Kind::Null,
        Kind::Map,
        Kind::Sequence,
        Kind::String,
        Kind::Float,
        Kind::Integer,
        Kind::UnsignedInteger,
        Kind::Boolean,
    ];

    /// Lexical kinds convert into one another by casting or by text parsing.
    pub const fn is_lexical(self) -> bool {
        matches!(
            self,
            Kind::String | Kind::Float | Kind::Integer | Kind::UnsignedInteger | Kind::Boolean
        )
    }

    /// Collection kinds own child values.
    pub const fn is_collection(self) -> bool {
        matches!(self, Kind::Map | Kind::Sequence)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Map => "map",
            Kind::Sequence => "sequence",
            Kind::String => "string",
            Kind::Float => "float",
            Kind::Integer => "integer",
            Kind::UnsignedInteger => "unsigned integer",
            Kind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

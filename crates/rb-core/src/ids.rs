//! Strongly typed, zero-cost identifier wrappers.
//!
//! Every entity collection in the world is a dense `Vec` that never shrinks
//! (structures and depots are only flagged, never removed), so an id is
//! simply an index.  Agents and fires store these ids instead of references.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a firefighting agent ("robot").
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a structure ("building").  Also identifies the fire burning
    /// in it, since a structure holds at most one active fire.
    pub struct StructureId(u32);
}

typed_id! {
    /// Index of a water depot ("station").
    pub struct DepotId(u32);
}

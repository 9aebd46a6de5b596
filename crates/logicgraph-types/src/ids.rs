//! Typed integer identifiers.
//!
//! Asset ids come straight from the authored game data and are only unique
//! within their own kind, so each kind gets its own newtype to prevent
//! accidental mixing at compile time.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around `u32` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Wrap a raw identifier.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Return the raw identifier.
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Asset identifier of a world or an area, as authored in the game data.
    AssetId
}

define_id! {
    /// Identifier of a pickup slot: an index into the pickup table.
    ///
    /// A pickup slot is also a resource in its own right -- collecting the
    /// slot marks it as held, independently of what item it contained.
    PickupIndex
}

impl core::fmt::Display for AssetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl core::fmt::Display for PickupIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PickupIndex {}", self.0)
    }
}

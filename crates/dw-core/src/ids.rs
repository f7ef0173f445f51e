//! Integer handles for walkers and portals.
//!
//! Handles are plain `u32` newtypes issued densely from 0, so `.index()` can
//! address a `Vec` directly.  The field is public; constructing a handle that
//! was never issued is allowed and simply fails lookup.

use std::fmt;

/// Declare a `u32` handle type.  `$label` is the word used by `Display`.
macro_rules! handle {
    ($(#[$attr:meta])* $name:ident, $label:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }
    };
}

handle! {
    /// A walker registered on a map, numbered in registration order.
    AgentId, "agent"
}

handle! {
    /// Position of an entrance/exit pair in a portal map's list.
    PortalId, "portal"
}

//! Node and edge identifiers.
//!
//! Both wrap a `u32` that is the position in the network's flat arrays, so
//! `.index()` is all a search needs to reach per-node or per-edge data.
//! `u32::MAX` is reserved as the "none" value used to fill predecessor
//! tables before a node is reached.

use std::fmt;

/// Declare one or more `u32` id types.  The literal after `=` prefixes the
/// number in `Display` output (`n12`, `e40`).
macro_rules! typed_id {
    ($($(#[$attr:meta])* $vis:vis struct $name:ident = $prefix:literal;)+) => {$(
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Placeholder for "no id", e.g. the predecessor of the origin.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!($prefix, "{}"), self.0)
                } else {
                    f.write_str(concat!($prefix, "-"))
                }
            }
        }
    )+};
}

typed_id! {
    /// A network node.  Ids are handed out in creation order and never
    /// reused.  The derived `Ord` is the searches' tie-break: among queue
    /// entries with equal weight the lower id pops first.
    pub struct NodeId = "n";

    /// A directed edge, numbered in CSR order (grouped by source node, then
    /// insertion order within a node).
    pub struct EdgeId = "e";
}

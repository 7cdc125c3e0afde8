use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::index_vec::Idx;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Idx for $name {
            fn index(self) -> usize {
                self.0 as usize
            }

            /// # Panics
            /// If `idx` does not fit in a `u32`.
            fn from_usize(idx: usize) -> Self {
                assert!(
                    idx <= u32::MAX as usize,
                    "{} index {idx} overflows u32",
                    stringify!($name)
                );
                Self(idx as u32)
            }
        }
    };
}

define_id!(VertexId);
define_id!(EdgeId);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::index_vec::Idx;

    #[test]
    fn converts_within_range() {
        assert_eq!(EdgeId::from_usize(7), EdgeId::new(7));
        assert_eq!(VertexId::from_usize(u32::MAX as usize).index(), u32::MAX as usize);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "overflows u32")]
    fn oversized_index_panics() {
        EdgeId::from_usize(u32::MAX as usize + 1);
    }
}

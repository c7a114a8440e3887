//! Handles to refer to vertices, half edges and faces.
//!
//! The topology is a cyclic graph: half edges point to their twin, their
//! next/previous half edge, their origin vertex and their incident face.
//! Instead of modelling these links as ownership references (impossible in a
//! cycle), all elements live in arenas ([`crate::map::DenseMap`]) and are
//! addressed by small copyable handles, basically type-safe indices.

use std::fmt;
use std::hash::Hash;


/// The integer type used as index by all handle types.
///
/// By default, this is `u32`. If the Cargo feature `large-handle` is enabled,
/// it is `u64`. Subdivisions with more than 2³² − 1 elements per kind are
/// rare enough that the smaller, cache-friendlier index is the default.
#[allow(non_camel_case_types)]
#[cfg(not(feature = "large-handle"))]
pub type hsize = u32;

#[allow(non_camel_case_types)]
#[cfg(feature = "large-handle")]
pub type hsize = u64;


/// Types that can be used to refer to some element in a subdivision.
pub trait Handle: 'static + Copy + fmt::Debug + Eq + Ord + Hash {
    /// Creates a handle from the given index.
    fn new(idx: hsize) -> Self;

    /// Returns the index of the current handle.
    fn idx(&self) -> hsize;

    /// Helper to create a handle from a `usize`. Panics if `raw` does not fit
    /// into `hsize`.
    fn from_usize(raw: usize) -> Self {
        assert!(raw <= hsize::max_value() as usize);
        Self::new(raw as hsize)
    }

    /// Helper to get the index as `usize`.
    fn to_usize(&self) -> usize {
        self.idx() as usize
    }
}

macro_rules! make_handle_type {
    ($(#[$attr:meta])* $name:ident = $short:expr;) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(hsize);

        impl Handle for $name {
            #[inline(always)]
            fn new(idx: hsize) -> Self {
                $name(idx)
            }

            #[inline(always)]
            fn idx(&self) -> hsize {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, concat!($short, "{}"), self.0)
            }
        }
    }
}

make_handle_type!{
    /// A handle referring to a vertex.
    VertexHandle = "V";
}
make_handle_type!{
    /// A handle referring to a half edge.
    HalfEdgeHandle = "HE";
}
make_handle_type!{
    /// A handle referring to a face.
    FaceHandle = "F";
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_repr() {
        assert_eq!(format!("{:?}", VertexHandle::new(3)), "V3");
        assert_eq!(format!("{:?}", HalfEdgeHandle::new(0)), "HE0");
        assert_eq!(format!("{:?}", FaceHandle::new(123)), "F123");
    }

    #[test]
    fn usize_roundtrip() {
        let h = HalfEdgeHandle::from_usize(27);
        assert_eq!(h.idx(), 27);
        assert_eq!(h.to_usize(), 27);
    }
}

//! Arena storage addressed by handles.

use std::{
    fmt,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use stable_vec::{
    StableVec,
    core::DefaultCore,
    iter::{Indices, Iter as SvIter, Values as SvValues, ValuesMut as SvValuesMut},
};

use crate::handle::{hsize, Handle};


/// A contiguous arena mapping handles to values, backed by a `StableVec`.
///
/// Handles are handed out sequentially by [`DenseMap::push`], so the handle
/// space is dense: the handle is simply an index into the underlying vector,
/// making every lookup a plain array access. All element arenas and record
/// maps of the subdivision use this map, which keeps the cyclic
/// twin/next/prev reference graph representable as plain indices.
#[derive(Clone)]
pub struct DenseMap<H: Handle, T> {
    vec: StableVec<T>,
    _dummy: PhantomData<H>,
}

impl<H: Handle, T> DenseMap<H, T> {
    /// Creates an empty `DenseMap`.
    pub fn new() -> Self {
        Self {
            vec: StableVec::new(),
            _dummy: PhantomData,
        }
    }

    /// Adds a new element to the map and returns its handle.
    pub fn push(&mut self, elem: T) -> H {
        H::from_usize(self.vec.push(elem))
    }

    /// Returns a reference to the element associated with `handle`, or `None`
    /// if the handle was never handed out by this map.
    pub fn get(&self, handle: H) -> Option<&T> {
        self.vec.get(handle.to_usize())
    }

    /// Returns a mutable reference to the element associated with `handle`.
    pub fn get_mut(&mut self, handle: H) -> Option<&mut T> {
        self.vec.get_mut(handle.to_usize())
    }

    /// Returns `true` if an element is associated with `handle`.
    pub fn contains_handle(&self, handle: H) -> bool {
        self.vec.has_element_at(handle.to_usize())
    }

    /// Returns the number of elements in this map.
    pub fn num_elements(&self) -> hsize {
        self.vec.num_elements() as hsize
    }

    /// Returns the handle the next `push` call would return.
    pub fn next_push_handle(&self) -> H {
        H::from_usize(self.vec.next_push_index())
    }

    /// Returns an iterator over all handles in this map, in increasing index
    /// order.
    pub fn handles(&self) -> Handles<'_, H, T> {
        Handles {
            indices: self.vec.indices(),
            _dummy: PhantomData,
        }
    }

    /// Returns an iterator over references to all values.
    pub fn values(&self) -> SvValues<'_, T, DefaultCore<T>> {
        self.vec.values()
    }

    /// Returns an iterator over mutable references to all values.
    pub fn values_mut(&mut self) -> SvValuesMut<'_, T, DefaultCore<T>> {
        self.vec.values_mut()
    }

    /// Returns an iterator over pairs of handle and value reference.
    pub fn iter(&self) -> Iter<'_, H, T> {
        Iter {
            iter: self.vec.iter(),
            _dummy: PhantomData,
        }
    }
}

impl<H: Handle, T> Index<H> for DenseMap<H, T> {
    type Output = T;

    fn index(&self, handle: H) -> &Self::Output {
        match self.get(handle) {
            Some(elem) => elem,
            None => panic!("no element associated with {:?} in this map", handle),
        }
    }
}

impl<H: Handle, T> IndexMut<H> for DenseMap<H, T> {
    fn index_mut(&mut self, handle: H) -> &mut Self::Output {
        match self.get_mut(handle) {
            Some(elem) => elem,
            None => panic!("no element associated with {:?} in this map", handle),
        }
    }
}

impl<H: Handle, T> Default for DenseMap<H, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Handle, T: fmt::Debug> fmt::Debug for DenseMap<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}


/// Iterator over the handles of a [`DenseMap`].
#[derive(Debug, Clone)]
pub struct Handles<'map, H: Handle, T> {
    indices: Indices<'map, T, DefaultCore<T>>,
    _dummy: PhantomData<H>,
}

impl<H: Handle, T> Iterator for Handles<'_, H, T> {
    type Item = H;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(H::from_usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

/// Iterator over the handle/value pairs of a [`DenseMap`].
#[derive(Debug, Clone)]
pub struct Iter<'map, H: Handle, T> {
    iter: SvIter<'map, T, DefaultCore<T>>,
    _dummy: PhantomData<H>,
}

impl<'map, H: Handle, T> Iterator for Iter<'map, H, T> {
    type Item = (H, &'map T);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(idx, elem)| (H::from_usize(idx), elem))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::FaceHandle;

    #[test]
    fn push_and_lookup() {
        let mut map: DenseMap<FaceHandle, &str> = DenseMap::new();
        assert_eq!(map.num_elements(), 0);

        let anna = map.push("anna");
        let bob = map.push("bob");

        assert_eq!(map.num_elements(), 2);
        assert_eq!(map.get(anna), Some(&"anna"));
        assert_eq!(map[bob], "bob");
        assert!(map.contains_handle(anna));
        assert!(!map.contains_handle(FaceHandle::new(7)));
    }

    #[test]
    fn sequential_handles() {
        let mut map: DenseMap<FaceHandle, u32> = DenseMap::new();
        assert_eq!(map.next_push_handle(), FaceHandle::new(0));
        let a = map.push(27);
        let b = map.push(3);
        assert_eq!(a, FaceHandle::new(0));
        assert_eq!(b, FaceHandle::new(1));
        assert_eq!(map.next_push_handle(), FaceHandle::new(2));
    }

    #[test]
    fn iterators() {
        let mut map: DenseMap<FaceHandle, u32> = DenseMap::new();
        map.push(5);
        map.push(7);
        map.push(9);

        assert_eq!(
            map.handles().collect::<Vec<_>>(),
            [FaceHandle::new(0), FaceHandle::new(1), FaceHandle::new(2)],
        );
        assert_eq!(map.values().copied().collect::<Vec<_>>(), [5, 7, 9]);
        assert_eq!(
            map.iter().map(|(h, &v)| (h.idx(), v)).collect::<Vec<_>>(),
            [(0, 5), (1, 7), (2, 9)],
        );
    }

    #[test]
    fn mutation() {
        let mut map: DenseMap<FaceHandle, u32> = DenseMap::new();
        let h = map.push(1);
        map[h] += 1;
        for v in map.values_mut() {
            *v *= 10;
        }
        assert_eq!(map[h], 20);
    }
}

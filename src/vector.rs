//! A single-owner resizable array.
//!
//! `Vector<T>` keeps its elements in one contiguous `Vec<T>` but takes over the
//! growth decisions itself: capacity moves to `max(required, 2 * capacity, 1)`
//! whenever an insertion does not fit, and only `reserve` asks for an exact size.
//! Range and index arguments are validated up front, so a call that returns an
//! error has left the container exactly as it was.

use std::ops::{Index, IndexMut};
use std::slice;

use crate::error::ContainerError;

// =============================================================================
// Storage and capacity management
// =============================================================================

/// Growable contiguous sequence with checked range operations.
///
/// The type deliberately has no `Clone` impl: there is one owner of the
/// storage at a time. Ownership can still be moved.
#[derive(Debug)]
pub struct Vector<T> {
    data: Vec<T>,
    allocations: usize,
}

impl<T> Vector<T> {
    /// Creates an empty vector. Nothing is allocated until the first insertion.
    pub fn new() -> Self {
        Vector {
            data: Vec::new(),
            allocations: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Number of times the backing storage has been allocated or replaced.
    pub fn allocations(&self) -> usize {
        self.allocations
    }

    /// Makes sure at least `min_capacity` slots are allocated.
    ///
    /// Unlike the growth path used by insertions, this allocates exactly
    /// `min_capacity` slots. Smaller requests are a no-op.
    pub fn reserve(&mut self, min_capacity: usize) -> Result<(), ContainerError> {
        if min_capacity > self.data.capacity() {
            self.reallocate(min_capacity)?;
        }
        Ok(())
    }

    fn grown_capacity(&self, required: usize) -> usize {
        required
            .max(self.data.capacity().saturating_mul(2))
            .max(1)
    }

    fn grow_for(&mut self, required: usize) -> Result<(), ContainerError> {
        if required <= self.data.capacity() {
            return Ok(());
        }
        let target = self.grown_capacity(required);
        self.reallocate(target)
    }

    // Caller guarantees `target > capacity >= len`.
    fn reallocate(&mut self, target: usize) -> Result<(), ContainerError> {
        let before = self.data.capacity();
        self.data
            .try_reserve_exact(target - self.data.len())
            .map_err(|err| ContainerError::count(format!("cannot allocate {target} slots: {err}")))?;
        if self.data.capacity() != before {
            self.allocations += 1;
        }
        Ok(())
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Appends `value` at index `len()`.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows the address space, the same
    /// condition under which `Vec::push` panics.
    pub fn push_back(&mut self, value: T) {
        if let Err(err) = self.grow_for(self.data.len() + 1) {
            panic!("push_back: {err}");
        }
        self.data.push(value);
    }

    /// Appends the value built by `make` and hands back a reference to it.
    pub fn emplace_back<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.push_back(make());
        let last = self.data.len() - 1;
        &mut self.data[last]
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len()` behaves like `push_back`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        let len = self.data.len();
        if index > len {
            return Err(ContainerError::index(index, len));
        }
        self.grow_for(len + 1)?;
        self.data.insert(index, value);
        Ok(())
    }

    /// Copies every element of `other` in before `index`, keeping their order.
    pub fn insert_from(&mut self, index: usize, other: &Vector<T>) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        let len = self.data.len();
        if index > len {
            return Err(ContainerError::index(index, len));
        }
        let required = len
            .checked_add(other.len())
            .ok_or_else(|| ContainerError::count("combined length overflows usize"))?;
        self.grow_for(required)?;
        self.data.splice(index..index, other.data.iter().cloned());
        Ok(())
    }

    // =========================================================================
    // Removal and resizing
    // =========================================================================

    /// Removes the half-open range `[begin, end)` and closes the gap.
    ///
    /// `begin` must name a live element, so erasing from an empty vector, or
    /// starting at `len()`, is rejected even when the range is empty.
    pub fn erase(&mut self, begin: usize, end: usize) -> Result<(), ContainerError> {
        let len = self.data.len();
        if begin >= len || end > len || begin > end {
            return Err(ContainerError::range(begin, end, len));
        }
        self.data.drain(begin..end);
        Ok(())
    }

    /// Truncates to `new_len`, or pads with `T::default()` up to it.
    ///
    /// Shrinking never releases capacity.
    pub fn resize(&mut self, new_len: usize) -> Result<(), ContainerError>
    where
        T: Default,
    {
        if new_len <= self.data.len() {
            self.data.truncate(new_len);
            return Ok(());
        }
        self.grow_for(new_len)?;
        self.data.resize_with(new_len, T::default);
        Ok(())
    }

    // =========================================================================
    // Element access
    // =========================================================================

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Checked access: an index at or past `len()` is an `OutOfRange` error.
    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        self.data
            .get(index)
            .ok_or_else(|| ContainerError::index(index, self.data.len()))
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or_else(|| ContainerError::index(index, len))
    }

    /// Unchecked access.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: forwarded from the caller's contract.
        unsafe { self.data.get_unchecked(index) }
    }

    /// Unchecked mutable access.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: forwarded from the caller's contract.
        unsafe { self.data.get_unchecked_mut(index) }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: Default> Vector<T> {
    /// Creates a vector holding `len` default values, with capacity exactly `len`.
    pub fn with_len(len: usize) -> Result<Self, ContainerError> {
        let mut vector = Self::new();
        vector.reserve(len)?;
        vector.data.resize_with(len, T::default);
        Ok(vector)
    }

    /// Like [`Vector::with_len`], for counts that arrive as signed or wider
    /// integers. A count that does not fit in `usize` is an `InvalidArgument`.
    pub fn try_sized<N>(count: N) -> Result<Self, ContainerError>
    where
        N: TryInto<usize> + std::fmt::Display + Copy,
    {
        let len = count
            .try_into()
            .map_err(|_| ContainerError::count(format!("size {count} is not a valid element count")))?;
        Self::with_len(len)
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fast path: panics on a bad index instead of returning an error.
impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

// Goes through `push_back` so a collected vector obeys the same growth policy.
impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Vector::new();
        for item in iter {
            vector.push_back(item);
        }
        vector
    }
}

// =============================================================================
// Tests
// =============================================================================

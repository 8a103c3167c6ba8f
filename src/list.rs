//! Doubly-linked list wrapper.
//!
//! Positional operations walk the list, so they cost O(min(index, len - index)).

use std::collections::linked_list::{self, LinkedList};

use crate::error::ContainerError;

#[derive(Debug)]
pub struct List<T> {
    inner: LinkedList<T>,
}

impl<T> List<T> {
    pub fn new() -> Self {
        List {
            inner: LinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn front(&self) -> Option<&T> {
        self.inner.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.inner.back()
    }

    pub fn iter(&self) -> linked_list::Iter<'_, T> {
        self.inner.iter()
    }

    pub fn iter_mut(&mut self) -> linked_list::IterMut<'_, T> {
        self.inner.iter_mut()
    }

    pub fn push_front(&mut self, value: T) {
        self.inner.push_front(value);
    }

    pub fn push_back(&mut self, value: T) {
        self.inner.push_back(value);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }

    /// Inserts `value` so that it ends up at position `index`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        self.fill_at(index, |head| head.push_back(value))
    }

    /// Inserts `count` copies of `value` starting at position `index`.
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        self.fill_at(index, |head| {
            head.extend(std::iter::repeat(value).take(count));
        })
    }

    /// Moves every node of `other` in before `index`. `other` is left empty on
    /// success and untouched on error.
    pub fn splice(&mut self, index: usize, other: &mut LinkedList<T>) -> Result<(), ContainerError> {
        self.fill_at(index, |head| head.append(other))
    }

    // Cuts the list at `index`, lets `fill` extend the head, then reattaches the tail.
    fn fill_at<F>(&mut self, index: usize, fill: F) -> Result<(), ContainerError>
    where
        F: FnOnce(&mut LinkedList<T>),
    {
        let len = self.inner.len();
        if index > len {
            return Err(ContainerError::index(index, len));
        }
        let mut tail = self.inner.split_off(index);
        fill(&mut self.inner);
        self.inner.append(&mut tail);
        Ok(())
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = linked_list::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

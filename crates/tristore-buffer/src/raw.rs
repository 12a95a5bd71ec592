//! Unchecked element access.
//!
//! The only module in this crate allowed to contain `unsafe` code. Each
//! method skips the slice bounds checks of its safe counterpart on
//! [`Vec3Storage`]; the caller takes over the bounds obligation. Debug
//! builds still assert the contract.

#![allow(unsafe_code)]

use tristore_core::element::COMPONENTS;
use tristore_core::{Component, Element};

use crate::storage::Vec3Storage;

impl<K: Component> Vec3Storage<K> {
    /// [`get`](Self::get) without the capacity check.
    ///
    /// # Safety
    ///
    /// `i` must be less than [`capacity`](Self::capacity).
    #[inline]
    pub unsafe fn get_unchecked<'a>(&self, out: &'a mut Element<K>, i: usize) -> &'a mut Element<K> {
        debug_assert!(i < self.capacity, "get_unchecked index {i} past capacity");
        let offset = i * COMPONENTS;
        // SAFETY: i < capacity, so offset + 2 < capacity * 3 == data.len().
        unsafe {
            out[0] = *self.data.get_unchecked(offset);
            out[1] = *self.data.get_unchecked(offset + 1);
            out[2] = *self.data.get_unchecked(offset + 2);
        }
        out
    }

    /// [`set`](Self::set) without the capacity check.
    ///
    /// Length bookkeeping and gap zeroing are the same as `set`.
    ///
    /// # Safety
    ///
    /// `i` must be less than [`capacity`](Self::capacity).
    #[inline]
    pub unsafe fn set_unchecked(&mut self, i: usize, entry: Element<K>) -> &mut Self {
        debug_assert!(i < self.capacity, "set_unchecked index {i} past capacity");
        let offset = i * COMPONENTS;
        // SAFETY: i < capacity, so offset + 2 < capacity * 3 == data.len().
        unsafe {
            *self.data.get_unchecked_mut(offset) = entry[0];
            *self.data.get_unchecked_mut(offset + 1) = entry[1];
            *self.data.get_unchecked_mut(offset + 2) = entry[2];
        }
        if i >= self.len {
            // SAFETY: len <= i, so the range ends at offset <= data.len().
            unsafe {
                self.data
                    .get_unchecked_mut(self.len * COMPONENTS..offset)
                    .fill(K::ZERO);
            }
            self.len = i + 1;
        }
        self
    }

    /// [`pop`](Self::pop) without the emptiness check.
    ///
    /// # Safety
    ///
    /// The buffer must not be empty.
    #[inline]
    pub unsafe fn pop_unchecked<'a>(&mut self, out: &'a mut Element<K>) -> &'a mut Element<K> {
        debug_assert!(self.len > 0, "pop_unchecked on an empty Vec3Storage");
        self.len -= 1;
        // SAFETY: the old len was at most capacity, so len < capacity now.
        unsafe { self.get_unchecked(out, self.len) }
    }
}

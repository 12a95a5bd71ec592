//! Test utilities and mock types for tristore development.
//!
//! Provides a mock implementation of [`ElementSource`] that counts its
//! reads, plus deterministic element fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;

use tristore_core::{Component, Element, ElementSource};

pub use fixtures::{filled_storage, ramp, ramp_element, random_elements};

/// Mock implementation of [`ElementSource`].
///
/// Backed by a `Vec<Element<K>>`. Every [`read_element`](ElementSource::read_element)
/// call is counted, so tests can check that bulk operations read each
/// element exactly once.
pub struct MockElementSource<K: Component> {
    elements: Vec<Element<K>>,
    reads: Cell<usize>,
}

impl<K: Component> MockElementSource<K> {
    pub fn new(elements: Vec<Element<K>>) -> Self {
        Self {
            elements,
            reads: Cell::new(0),
        }
    }

    /// Number of `read_element` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// The elements this source was built from.
    pub fn elements(&self) -> &[Element<K>] {
        &self.elements
    }
}

impl<K: Component> ElementSource for MockElementSource<K> {
    type Component = K;

    fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn read_element<'a>(&self, out: &'a mut Element<K>, i: usize) -> &'a mut Element<K> {
        self.reads.set(self.reads.get() + 1);
        *out = self.elements[i];
        out
    }
}

//! The 3-component element scratch type and the [`ElementSource`] read contract.

use crate::component::Component;

/// Number of components in every element.
pub const COMPONENTS: usize = 3;

/// A single `(x, y, z)` element.
///
/// Elements have no identity of their own; they are caller-owned scratch
/// values passed into and out of buffer accessors.
pub type Element<K> = [K; COMPONENTS];

/// A zero-initialised scratch element.
#[inline]
pub fn unit<K: Component>() -> Element<K> {
    [K::ZERO; COMPONENTS]
}

/// A scratch element populated from three components.
#[inline]
pub fn unit_from<K: Component>(x: K, y: K, z: K) -> Element<K> {
    [x, y, z]
}

/// Read access to an indexed sequence of elements.
///
/// This is the contract bulk append needs from its source: a count and
/// positional reads. The source's component kind may differ from the
/// destination's; the destination converts on write.
pub trait ElementSource {
    /// Component kind of the elements this source yields.
    type Component: Component;

    /// Number of readable elements.
    fn element_count(&self) -> usize;

    /// Copy element `i` into `out` and return `out`.
    ///
    /// Callers must keep `i < element_count()`. Implementations may panic
    /// or return stale data otherwise.
    fn read_element<'a>(
        &self,
        out: &'a mut Element<Self::Component>,
        i: usize,
    ) -> &'a mut Element<Self::Component>;

    /// Whether the source has no elements.
    fn is_empty(&self) -> bool {
        self.element_count() == 0
    }
}

impl<K: Component> ElementSource for [Element<K>] {
    type Component = K;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn read_element<'a>(&self, out: &'a mut Element<K>, i: usize) -> &'a mut Element<K> {
        *out = self[i];
        out
    }
}

impl<K: Component, const N: usize> ElementSource for [Element<K>; N] {
    type Component = K;

    fn element_count(&self) -> usize {
        N
    }

    fn read_element<'a>(&self, out: &'a mut Element<K>, i: usize) -> &'a mut Element<K> {
        *out = self[i];
        out
    }
}

impl<K: Component> ElementSource for Vec<Element<K>> {
    type Component = K;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn read_element<'a>(&self, out: &'a mut Element<K>, i: usize) -> &'a mut Element<K> {
        *out = self[i];
        out
    }
}

//! The growable 3-component element buffer.
//!
//! [`Vec3Storage`] keeps its elements in one flat `Vec<K>` of
//! `capacity * 3` components. The backing storage is zero-initialised,
//! grows only by doubling, and is never shrunk. Only the prefix
//! `[0, len * 3)` is live; the tail holds zeros or stale data left
//! behind by [`pop`](Vec3Storage::pop).
//!
//! # Checked and unchecked access
//!
//! The default accessors do not check indices against the logical
//! length. Reading past `len` returns whatever the tail holds, and
//! writing past `len` extends it. Indices past the allocated capacity
//! still panic. The `try_*` methods add the
//! logical checks and report [`StorageError`]s; the `*_unchecked`
//! methods in this crate's `raw` module skip even the slice checks.
//!
//! # Threading
//!
//! The buffer is not internally synchronized. Growth replaces the
//! backing allocation, so writers need exclusive access (`&mut`).

use std::fmt;

use log::{debug, trace};
use tristore_core::element::{unit, unit_from, COMPONENTS};
use tristore_core::{
    Component, ComponentKind, Element, ElementSource, StorageConfig, StorageError,
};

/// A growable, contiguous buffer of `(x, y, z)` elements of kind `K`.
#[derive(Clone)]
pub struct Vec3Storage<K: Component> {
    /// Backing storage. `data.len() == capacity * 3` at all times.
    pub(crate) data: Vec<K>,
    /// Allocated size, in elements.
    pub(crate) capacity: usize,
    /// Logical length, in elements.
    pub(crate) len: usize,
}

impl<K: Component> Vec3Storage<K> {
    /// Default number of elements allocated at construction.
    pub const SIZE_DEFAULT: usize = StorageConfig::DEFAULT_INITIAL_CAPACITY;

    /// The numeric kind this buffer stores.
    pub const KIND: ComponentKind = K::KIND;

    /// Type name reported by [`name`](Self::name).
    pub const NAME: &'static str = "Vec3Storage";

    /// Create an empty buffer with room for [`SIZE_DEFAULT`](Self::SIZE_DEFAULT) elements.
    pub fn new() -> Self {
        Self::allocate(Self::SIZE_DEFAULT)
    }

    /// Create an empty buffer from a validated config.
    pub fn with_config(config: StorageConfig) -> Result<Self, StorageError> {
        config.validate::<K>()?;
        Ok(Self::allocate(config.initial_capacity))
    }

    fn allocate(capacity: usize) -> Self {
        Self {
            data: vec![K::ZERO; capacity * COMPONENTS],
            capacity,
            len: 0,
        }
    }

    /// Always `"Vec3Storage"`.
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Number of live elements. Same as [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the backing storage can hold without growing.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// A zeroed scratch element for use with [`get`](Self::get) and [`pop`](Self::pop).
    pub fn unit() -> Element<K> {
        unit()
    }

    /// A scratch element holding `(x, y, z)`.
    pub fn unit_from(x: K, y: K, z: K) -> Element<K> {
        unit_from(x, y, z)
    }

    /// Copy element `i` into `out` and return `out`.
    ///
    /// `i` is not checked against [`len`](Self::len): reading in
    /// `[len, capacity)` yields zeros or stale data.
    ///
    /// # Panics
    ///
    /// Panics if `i >= capacity`.
    #[inline]
    pub fn get<'a>(&self, out: &'a mut Element<K>, i: usize) -> &'a mut Element<K> {
        let offset = self.element_offset(i);
        out.copy_from_slice(&self.data[offset..offset + COMPONENTS]);
        out
    }

    /// Like [`get`](Self::get), but fails if `i` is not a live element.
    pub fn try_get<'a>(
        &self,
        out: &'a mut Element<K>,
        i: usize,
    ) -> Result<&'a mut Element<K>, StorageError> {
        if i >= self.len {
            return Err(StorageError::IndexOutOfBounds {
                index: i,
                len: self.len,
            });
        }
        Ok(self.get(out, i))
    }

    /// Element `i` by value. Same contract as [`get`](Self::get).
    #[inline]
    pub fn element(&self, i: usize) -> Element<K> {
        let mut out = unit();
        self.get(&mut out, i);
        out
    }

    /// Remove the last element, copying it into `out`. Returns `out`.
    ///
    /// The vacated storage is left as is; it is zeroed only by
    /// [`clear`](Self::clear).
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    #[inline]
    pub fn pop<'a>(&mut self, out: &'a mut Element<K>) -> &'a mut Element<K> {
        assert!(self.len > 0, "pop on an empty Vec3Storage");
        self.len -= 1;
        self.get(out, self.len)
    }

    /// Like [`pop`](Self::pop), but returns [`StorageError::Empty`] instead of panicking.
    pub fn try_pop<'a>(
        &mut self,
        out: &'a mut Element<K>,
    ) -> Result<&'a mut Element<K>, StorageError> {
        if self.len == 0 {
            return Err(StorageError::Empty);
        }
        Ok(self.pop(out))
    }

    /// The whole backing storage, including the non-live tail.
    ///
    /// Its length is `capacity * 3`, not `len * 3`. Consumers that only
    /// want live data should use [`live_storage`](Self::live_storage).
    pub fn storage(&self) -> &[K] {
        &self.data
    }

    /// Mutable access to the whole backing storage.
    pub fn storage_mut(&mut self) -> &mut [K] {
        &mut self.data
    }

    /// The live prefix of the backing storage, `len * 3` components long.
    pub fn live_storage(&self) -> &[K] {
        &self.data[..self.len * COMPONENTS]
    }

    /// Mutable access to the live prefix of the backing storage.
    pub fn live_storage_mut(&mut self) -> &mut [K] {
        &mut self.data[..self.len * COMPONENTS]
    }

    /// The whole backing storage as bytes, for upload to a GPU buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// The live prefix as bytes.
    pub fn live_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.live_storage())
    }

    /// Distance in bytes between consecutive elements, as a vertex
    /// attribute stride.
    pub fn stride_bytes(&self) -> usize {
        COMPONENTS * std::mem::size_of::<K>()
    }

    /// The live elements as a slice of `[K; 3]`.
    pub fn elements(&self) -> &[Element<K>] {
        bytemuck::cast_slice(self.live_storage())
    }

    /// The live elements as a mutable slice of `[K; 3]`.
    pub fn elements_mut(&mut self) -> &mut [Element<K>] {
        bytemuck::cast_slice_mut(self.live_storage_mut())
    }

    /// Iterate over copies of the live elements in index order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Element<K>>> {
        self.elements().iter().copied()
    }

    /// Double the capacity until it is at least `n` elements.
    ///
    /// Never shrinks. The doubled size is computed first and the
    /// backing storage reallocated once. Requests too large to address
    /// panic with "capacity overflow" instead of looping forever; use
    /// [`try_store_at_least`](Self::try_store_at_least) to get an error.
    pub fn store_at_least(&mut self, n: usize) -> &mut Self {
        if self.capacity < n {
            match self.doubled_capacity_for(n) {
                Some(capacity) => self.grow_to(capacity),
                None => capacity_overflow(),
            }
        }
        self
    }

    /// Like [`store_at_least`](Self::store_at_least), but fails without
    /// allocating if the doubled capacity would not be addressable.
    pub fn try_store_at_least(&mut self, n: usize) -> Result<&mut Self, StorageError> {
        if self.capacity < n {
            let capacity = self
                .doubled_capacity_for(n)
                .ok_or(StorageError::CapacityOverflow { requested: n })?;
            self.grow_to(capacity);
        }
        Ok(self)
    }

    /// Zero every component of the backing storage and reset the length.
    ///
    /// Capacity is unchanged.
    pub fn clear(&mut self) -> &mut Self {
        self.data.fill(K::ZERO);
        self.len = 0;
        trace!("cleared Vec3Storage<{}> ({} elements)", K::KIND, self.capacity);
        self
    }

    /// Write `entry` at element index `i`.
    ///
    /// Writing at or past the logical end sets the length to `i + 1`.
    /// Elements skipped over between the old end and `i` are zeroed.
    ///
    /// # Panics
    ///
    /// Panics if `i >= capacity`. The buffer does not grow on `set`.
    #[inline]
    pub fn set(&mut self, i: usize, entry: Element<K>) -> &mut Self {
        let offset = self.element_offset(i);
        self.data[offset..offset + COMPONENTS].copy_from_slice(&entry);
        if i >= self.len {
            self.data[self.len * COMPONENTS..offset].fill(K::ZERO);
            self.len = i + 1;
        }
        self
    }

    /// Like [`set`](Self::set), but returns
    /// [`StorageError::CapacityExceeded`] instead of panicking.
    pub fn try_set(&mut self, i: usize, entry: Element<K>) -> Result<&mut Self, StorageError> {
        if i >= self.capacity {
            return Err(StorageError::CapacityExceeded {
                index: i,
                capacity: self.capacity,
            });
        }
        Ok(self.set(i, entry))
    }

    /// Append `entry` after the last live element, doubling first if full.
    #[inline]
    pub fn push(&mut self, entry: Element<K>) -> &mut Self {
        if self.len == self.capacity {
            self.double_storage();
        }
        let offset = self.len * COMPONENTS;
        self.data[offset..offset + COMPONENTS].copy_from_slice(&entry);
        self.len += 1;
        self
    }

    /// Append every element of `other`, in order.
    ///
    /// Capacity is reserved once up front. `other` may hold a different
    /// component kind; each component is converted with
    /// [`Component::cast_from`]. `other` is not modified.
    pub fn append<S>(&mut self, other: &S) -> &mut Self
    where
        S: ElementSource + ?Sized,
    {
        let count = other.element_count();
        let needed = match self.len.checked_add(count) {
            Some(needed) => needed,
            None => capacity_overflow(),
        };
        self.store_at_least(needed);

        let mut temp = unit::<S::Component>();
        for i in 0..count {
            other.read_element(&mut temp, i);
            let offset = self.len * COMPONENTS;
            self.data[offset] = K::cast_from(temp[0]);
            self.data[offset + 1] = K::cast_from(temp[1]);
            self.data[offset + 2] = K::cast_from(temp[2]);
            self.len += 1;
        }
        self
    }

    /// Append a flat run of components, three per element.
    ///
    /// Fails with [`StorageError::LengthMismatch`] if `components.len()`
    /// is not a multiple of 3, or [`StorageError::CapacityOverflow`] if
    /// the result would not be addressable. Nothing is written on error.
    pub fn append_components(&mut self, components: &[K]) -> Result<&mut Self, StorageError> {
        if components.len() % COMPONENTS != 0 {
            return Err(StorageError::LengthMismatch {
                len: components.len(),
            });
        }
        let count = components.len() / COMPONENTS;
        let needed = self.appended_len(count)?;
        self.try_store_at_least(needed)?;

        let start = self.len * COMPONENTS;
        self.data[start..start + components.len()].copy_from_slice(components);
        self.len = needed;
        Ok(self)
    }

    /// Call `predicate(x, y, z, index)` for every live element, in order.
    pub fn each<F>(&self, mut predicate: F) -> &Self
    where
        F: FnMut(K, K, K, usize),
    {
        for (i, &[x, y, z]) in self.elements().iter().enumerate() {
            predicate(x, y, z, i);
        }
        self
    }

    /// Call `predicate(storage, xi, yi, zi)` for every live element, in order.
    ///
    /// `storage` is the whole backing array and `xi`, `yi`, `zi` are the
    /// absolute offsets of the current element's components. Writes
    /// through those offsets update the element in place.
    pub fn mutate_each<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&mut [K], usize, usize, usize),
    {
        let end = self.len * COMPONENTS;
        let storage = self.data.as_mut_slice();
        for ptr in (0..end).step_by(COMPONENTS) {
            predicate(storage, ptr, ptr + 1, ptr + 2);
        }
        self
    }

    /// Component offset of element `i`, which must lie inside the allocation.
    #[inline]
    fn element_offset(&self, i: usize) -> usize {
        assert!(
            i < self.capacity,
            "element index {i} out of range for capacity {}",
            self.capacity
        );
        i * COMPONENTS
    }

    /// Length after appending `count` elements, or the count that overflowed it.
    fn appended_len(&self, count: usize) -> Result<usize, StorageError> {
        self.len
            .checked_add(count)
            .ok_or(StorageError::CapacityOverflow { requested: count })
    }

    fn double_storage(&mut self) {
        match self.capacity.checked_mul(2) {
            Some(capacity) if Self::addressable(capacity) => self.grow_to(capacity),
            _ => capacity_overflow(),
        }
    }

    /// Smallest `capacity * 2^k` that is at least `n`, if addressable.
    fn doubled_capacity_for(&self, n: usize) -> Option<usize> {
        let mut capacity = self.capacity;
        while capacity < n {
            capacity = capacity
                .checked_mul(2)
                .filter(|&c| Self::addressable(c))?;
        }
        Some(capacity)
    }

    fn grow_to(&mut self, capacity: usize) {
        // Full-buffer copy: the dead tail moves along with the live prefix.
        self.data.resize(capacity * COMPONENTS, K::ZERO);
        debug!(
            "Vec3Storage<{}> grew from {} to {} elements",
            K::KIND,
            self.capacity,
            capacity
        );
        self.capacity = capacity;
    }

    fn addressable(capacity: usize) -> bool {
        capacity
            .checked_mul(COMPONENTS * std::mem::size_of::<K>())
            .is_some_and(|bytes| bytes <= isize::MAX as usize)
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<K: Component> Default for Vec3Storage<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Component> fmt::Debug for Vec3Storage<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec3Storage")
            .field("kind", &K::KIND)
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .finish()
    }
}

/// Two buffers are equal when their live elements are equal.
/// Capacity and the non-live tail are ignored.
impl<K: Component> PartialEq for Vec3Storage<K> {
    fn eq(&self, other: &Self) -> bool {
        self.elements() == other.elements()
    }
}

impl<K: Component> ElementSource for Vec3Storage<K> {
    type Component = K;

    fn element_count(&self) -> usize {
        self.len
    }

    fn read_element<'a>(&self, out: &'a mut Element<K>, i: usize) -> &'a mut Element<K> {
        self.get(out, i)
    }
}

impl<K: Component> Extend<Element<K>> for Vec3Storage<K> {
    fn extend<I: IntoIterator<Item = Element<K>>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Some(needed) = self.len.checked_add(lower) {
            self.store_at_least(needed);
        }
        for entry in iter {
            self.push(entry);
        }
    }
}

impl<K: Component> FromIterator<Element<K>> for Vec3Storage<K> {
    fn from_iter<I: IntoIterator<Item = Element<K>>>(iter: I) -> Self {
        let mut storage = Self::new();
        storage.extend(iter);
        storage
    }
}

impl<'a, K: Component> IntoIterator for &'a Vec3Storage<K> {
    type Item = Element<K>;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Element<K>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! tristore: growable storage for `(x, y, z)` numeric elements.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the tristore sub-crates. For most users, adding `tristore` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tristore::prelude::*;
//!
//! let mut positions = Vec3FStorage::new();
//! positions.push([1.0, 2.0, 3.0]).push([4.0, 5.0, 6.0]);
//! assert_eq!(positions.size(), 2);
//!
//! let mut out = Vec3FStorage::unit();
//! assert_eq!(*positions.get(&mut out, 1), [4.0, 5.0, 6.0]);
//! assert_eq!(*positions.pop(&mut out), [4.0, 5.0, 6.0]);
//!
//! // Scale every vertex in place.
//! positions.mutate_each(|storage, x, y, z| {
//!     storage[x] *= 2.0;
//!     storage[y] *= 2.0;
//!     storage[z] *= 2.0;
//! });
//!
//! // Hand the live vertices to a graphics API.
//! let bytes: &[u8] = positions.live_bytes();
//! assert_eq!(bytes.len(), positions.size() * positions.stride_bytes());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`buffer`] | `tristore-buffer` | `Vec3Storage` and its four specializations |
//! | [`types`] | `tristore-core` | Component kinds, elements, config, errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element buffers (`tristore-buffer`).
///
/// [`buffer::Vec3Storage`] is generic over the component kind;
/// [`buffer::Vec3FStorage`], [`buffer::Vec3DStorage`],
/// [`buffer::Vec3IStorage`] and [`buffer::Vec3UIStorage`] fix it.
pub use tristore_buffer as buffer;

/// Component kinds, element helpers, config and errors (`tristore-core`).
pub use tristore_core as types;

/// Common imports for typical tristore usage.
///
/// ```rust
/// use tristore::prelude::*;
/// ```
pub mod prelude {
    // Buffers
    pub use tristore_buffer::{
        Vec3DStorage, Vec3FStorage, Vec3IStorage, Vec3Storage, Vec3UIStorage,
    };

    // Core types and traits
    pub use tristore_core::{
        unit, unit_from, Component, ComponentKind, Element, ElementSource, StorageConfig,
    };

    // Errors
    pub use tristore_core::StorageError;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn prelude_covers_a_round_trip() {
        let mut s = Vec3Storage::<u32>::with_config(StorageConfig::new(4)).unwrap();
        s.push(unit_from(1, 2, 3));
        let mut out = unit();
        assert_eq!(s.try_get(&mut out, 0).copied(), Ok([1, 2, 3]));
        assert_eq!(
            s.try_get(&mut out, 1).copied(),
            Err(StorageError::IndexOutOfBounds { index: 1, len: 1 })
        );
    }
}

//! Growable contiguous storage for 3-component numeric elements.
//!
//! [`Vec3Storage<K>`] holds `(x, y, z)` triples of one numeric kind in a
//! single flat allocation suitable for handing to a graphics API as a
//! vertex buffer. Appends are amortised O(1) through capacity doubling.
//! This crate is the only one in the workspace that may contain `unsafe`
//! code, confined to the `raw` module's unchecked accessors.
//!
//! # Layout
//!
//! ```text
//! Vec3Storage<K>
//! ├── data: Vec<K>      capacity * 3 components, zero-initialised
//! ├── capacity          elements allocated, only ever doubles
//! └── len               live elements; [0, len * 3) of data is live
//! ```
//!
//! # Specializations
//!
//! | Alias | Component |
//! |-------|-----------|
//! | [`Vec3FStorage`] | `f32` |
//! | [`Vec3DStorage`] | `f64` |
//! | [`Vec3IStorage`] | `i32` |
//! | [`Vec3UIStorage`] | `u32` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod raw;
pub mod storage;

pub use storage::Vec3Storage;

/// Buffer of `f32` elements.
pub type Vec3FStorage = Vec3Storage<f32>;

/// Buffer of `f64` elements.
pub type Vec3DStorage = Vec3Storage<f64>;

/// Buffer of `i32` elements.
pub type Vec3IStorage = Vec3Storage<i32>;

/// Buffer of `u32` elements.
pub type Vec3UIStorage = Vec3Storage<u32>;

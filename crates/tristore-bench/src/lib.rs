//! Benchmark workloads for tristore buffers.
//!
//! - [`sphere_vertices`]: points evenly spread over a unit sphere, the
//!   shape of a typical vertex upload.
//! - [`sphere_storage`]: the same points pushed into a [`Vec3Storage`].

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tristore_buffer::Vec3Storage;
use tristore_core::{Component, Element};

/// `n` points on the unit sphere along a Fibonacci spiral.
///
/// Deterministic, with no two points coinciding for `n > 1`.
pub fn sphere_vertices<K: Component>(n: usize) -> Vec<Element<K>> {
    let golden_angle = std::f64::consts::PI * (3.0 - 5f64.sqrt());
    (0..n)
        .map(|i| {
            let y = if n > 1 {
                1.0 - 2.0 * i as f64 / (n - 1) as f64
            } else {
                0.0
            };
            let radius = (1.0 - y * y).sqrt();
            let theta = golden_angle * i as f64;
            [
                K::from_f64(radius * theta.cos()),
                K::from_f64(y),
                K::from_f64(radius * theta.sin()),
            ]
        })
        .collect()
}

/// A buffer holding [`sphere_vertices`]`(n)`.
pub fn sphere_storage<K: Component>(n: usize) -> Vec3Storage<K> {
    sphere_vertices(n).into_iter().collect()
}

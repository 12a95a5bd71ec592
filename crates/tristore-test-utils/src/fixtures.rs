//! Deterministic element fixtures.
//!
//! - [`ramp_element`] / [`ramp`]: element `i` is `(3i, 3i + 1, 3i + 2)`,
//!   so every component is distinct and its position is recoverable.
//! - [`random_elements`]: seeded pseudo-random elements in `[-1000, 1000]`.
//! - [`filled_storage`]: a [`Vec3Storage`] pushed full of ramp elements.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tristore_buffer::Vec3Storage;
use tristore_core::{Component, Element};

/// Element `i` of the ramp sequence.
pub fn ramp_element<K: Component>(i: usize) -> Element<K> {
    let base = (i * 3) as f64;
    [
        K::from_f64(base),
        K::from_f64(base + 1.0),
        K::from_f64(base + 2.0),
    ]
}

/// The first `n` ramp elements.
pub fn ramp<K: Component>(n: usize) -> Vec<Element<K>> {
    (0..n).map(ramp_element).collect()
}

/// `n` pseudo-random elements, reproducible from `seed`.
///
/// Components are integers in `[-1000, 1000]` converted to `K`, so
/// unsigned kinds see negatives saturate to zero.
pub fn random_elements<K: Component>(n: usize, seed: u64) -> Vec<Element<K>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut next = || K::from_f64(f64::from(rng.next_u32() % 2001) - 1000.0);
    (0..n).map(|_| [next(), next(), next()]).collect()
}

/// A default-capacity buffer holding the first `n` ramp elements.
pub fn filled_storage<K: Component>(n: usize) -> Vec3Storage<K> {
    let mut storage = Vec3Storage::new();
    for i in 0..n {
        storage.push(ramp_element(i));
    }
    storage
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_components_are_sequential() {
        let r = ramp::<u32>(3);
        assert_eq!(r, vec![[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
    }

    #[test]
    fn random_elements_are_reproducible() {
        let a = random_elements::<f32>(50, 7);
        let b = random_elements::<f32>(50, 7);
        let c = random_elements::<f32>(50, 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().flatten().all(|v| (-1000.0..=1000.0).contains(v)));
    }

    #[test]
    fn filled_storage_matches_ramp() {
        let s = filled_storage::<i32>(10);
        assert_eq!(s.elements(), &ramp::<i32>(10)[..]);
    }
}

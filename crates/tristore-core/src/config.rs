//! Buffer configuration parameters.

use crate::component::Component;
use crate::element::COMPONENTS;
use crate::error::StorageError;

/// Configuration for an element buffer.
///
/// Only the starting capacity is configurable; growth is always by
/// doubling. Validated when the buffer is constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    /// Number of elements the buffer can hold before its first growth.
    ///
    /// Default: 1024. Must be at least 1, since doubling from zero never
    /// reaches any requested size.
    pub initial_capacity: usize,
}

impl StorageConfig {
    /// Default initial capacity, in elements.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

    /// Create a config with the given initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Number of components the initial backing storage holds.
    ///
    /// Returns `None` if `initial_capacity * 3` overflows.
    pub fn component_len(&self) -> Option<usize> {
        self.initial_capacity.checked_mul(COMPONENTS)
    }

    /// Size of the initial backing storage in bytes for component kind `K`.
    ///
    /// Returns `None` on overflow.
    pub fn byte_len<K: Component>(&self) -> Option<usize> {
        self.component_len()?.checked_mul(std::mem::size_of::<K>())
    }

    /// Check that the config describes an allocatable buffer of kind `K`.
    pub fn validate<K: Component>(&self) -> Result<(), StorageError> {
        if self.initial_capacity == 0 {
            return Err(StorageError::InvalidConfig {
                reason: "initial_capacity must be at least 1".into(),
            });
        }
        match self.byte_len::<K>() {
            Some(bytes) if bytes <= isize::MAX as usize => Ok(()),
            _ => Err(StorageError::InvalidConfig {
                reason: format!(
                    "initial_capacity {} exceeds the addressable size for {}",
                    self.initial_capacity,
                    K::KIND
                ),
            }),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

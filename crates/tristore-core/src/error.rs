//! Error types reported by the checked buffer operations.
//!
//! The default accessors never produce these: they follow the unchecked
//! fast-path contract. Only the `try_*` variants and config validation do.

use std::error::Error;
use std::fmt;

/// Errors from checked element buffer operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// A read addressed an element at or past the logical length.
    IndexOutOfBounds {
        /// The element index requested.
        index: usize,
        /// The logical length at the time of the call.
        len: usize,
    },
    /// A write addressed an element past the allocated capacity.
    CapacityExceeded {
        /// The element index requested.
        index: usize,
        /// The allocated capacity, in elements.
        capacity: usize,
    },
    /// Attempted to pop from an empty buffer.
    Empty,
    /// Growing to the requested element count would overflow `usize`.
    CapacityOverflow {
        /// The element count that could not be accommodated: the target
        /// capacity for a reservation, or the number of elements being
        /// appended when the resulting length itself overflows.
        requested: usize,
    },
    /// A [`StorageConfig`](crate::StorageConfig) failed validation.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// A flat component slice whose length is not a multiple of 3.
    LengthMismatch {
        /// Length of the offending slice, in components.
        len: usize,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "element index {index} out of bounds for length {len}")
            }
            Self::CapacityExceeded { index, capacity } => {
                write!(
                    f,
                    "element index {index} exceeds capacity of {capacity} elements"
                )
            }
            Self::Empty => write!(f, "buffer is empty"),
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: requested {requested} elements")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid storage config: {reason}"),
            Self::LengthMismatch { len } => {
                write!(f, "component slice length {len} is not a multiple of 3")
            }
        }
    }
}

impl Error for StorageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_index_and_len() {
        let err = StorageError::IndexOutOfBounds { index: 7, len: 3 };
        assert_eq!(err.to_string(), "element index 7 out of bounds for length 3");
    }

    #[test]
    fn display_capacity_exceeded() {
        let err = StorageError::CapacityExceeded {
            index: 4096,
            capacity: 1024,
        };
        assert!(err.to_string().contains("capacity of 1024"));
    }

    #[test]
    fn usable_as_boxed_error() {
        let err: Box<dyn Error> = Box::new(StorageError::Empty);
        assert_eq!(err.to_string(), "buffer is empty");
    }
}

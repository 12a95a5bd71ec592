//! Core types and traits for the tristore element buffers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the numeric component kinds, the 3-component element scratch type,
//! the [`ElementSource`] read contract, configuration, and error types
//! shared by the buffer crate and its users.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod component;
pub mod config;
pub mod element;
pub mod error;

pub use component::{Component, ComponentKind};
pub use config::StorageConfig;
pub use element::{unit, unit_from, Element, ElementSource, COMPONENTS};
pub use error::StorageError;

//! Core value types for the numkit toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate type consumed by the spatial index and the strongly-typed
//! indices it hands back to callers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod point;

pub use id::{CellId, PointId, PointRange};
pub use point::Point2D;

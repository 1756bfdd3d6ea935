//! Test utilities for numkit development.
//!
//! - [`reference`]: the small hand-checked layout used across grid tests.
//! - [`fixtures`]: seeded point clouds and random walks for property
//!   tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;

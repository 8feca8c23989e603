//! Test utilities for the Flowboard platform
//!
//! Builders and data generators shared by the platform's test suites.
//! Helpers here may panic on misuse; they are not production code.

pub mod builders;
pub mod data_generators;

pub use builders::TestStoreBuilder;
pub use data_generators::{node_data, random_suffix};

//! Person Types - Pure type definitions shared by the directory server and its clients
//!
//! This crate contains only serde data types with no async runtime dependencies.

pub mod person;

pub use person::*;

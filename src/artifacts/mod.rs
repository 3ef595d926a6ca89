//! Rift data structures
//!
//! This module contains the core Rift types:
//!
//! - `core`: Shared error taxonomy
//! - `ignore`: Ignore-pattern compilation and matching
//! - `objects`: Rift object types (blob, commit)

pub mod core;
pub mod ignore;
pub mod objects;

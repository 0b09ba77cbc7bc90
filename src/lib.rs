//! citydb-rs
//!
//! Workspace root crate. Re-exports [`citydb_core`] so the demos under
//! `demos/` can be run with `cargo run --example basic_usage`.

pub use citydb_core::*;

//! Checkpoint persistence.
//!
//! The tracker keeps a single flat file of previously announced sequence
//! ids, read at the start of each run and overwritten at the end.

pub mod checkpoint;

pub use checkpoint::SeenSet;

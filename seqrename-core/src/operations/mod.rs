//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core business logic for each seqrename operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod rename;

pub use rename::{rename_operation, rename_sequentially, RenameOptions};

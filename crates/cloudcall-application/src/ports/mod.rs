//! Application Ports
//!
//! Interfaces owned by the application layer. Provider crates plug into
//! these; the infrastructure layer wires them together.

/// Service provider registry
pub mod registry;

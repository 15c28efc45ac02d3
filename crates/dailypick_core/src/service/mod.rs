//! Use-case services wiring vault, rotation, and settings together.
//!
//! # Responsibility
//! - Provide stable entry points for host callers.
//! - Delegate storage to vault and settings store implementations.
//!
//! # Invariants
//! - Services never bypass store validation/persistence contracts.
//! - Services remain storage-agnostic.

pub mod daily_pick;

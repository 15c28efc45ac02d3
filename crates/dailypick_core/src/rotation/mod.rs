//! Source list parsing and cyclic item selection.
//!
//! # Responsibility
//! - Turn raw source file text into a clean item list.
//! - Pick the item for a given rotation position and report the position
//!   that follows it.
//!
//! # See also docs/architecture/rotation-flow.md

pub mod rotator;
pub mod source_list;

//! Naming Module
//!
//! Short, collision-aware volume names derived from mount paths.

pub mod resolver;

pub use resolver::*;

//! Configuration Module
//!
//! Loading and parsing of the multi-disk storage declaration.

pub mod parser;
pub mod source;

pub use parser::*;
pub use source::*;

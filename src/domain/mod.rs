//! Domain layer - Storage volume value objects
//!
//! Types shared by the declaration parser, the name resolver and the
//! volume-mount builder that consumes their output.

pub mod volume;

pub use volume::*;

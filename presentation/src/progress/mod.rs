//! Progress reporting implementations

pub mod reporter;

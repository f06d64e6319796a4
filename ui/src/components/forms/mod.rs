//! Form controls.

pub mod submit;

pub use submit::*;

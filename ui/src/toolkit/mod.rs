//! Widget Toolkit Primitives
//!
//! Low-level interactive primitives the wrapper components in
//! [`crate::components`] are built on:
//!
//! - **button**: clickable control with visual variants
//! - **spinner**: indeterminate progress indicator
//! - **button_group**: toggle-group container
//!
//! Primitives own their structural classes (`btn`, `spinner-border`, ...)
//! and accept a caller class for everything else. They never consult the
//! style registry; that is the wrapper layer's job.

pub mod button;
pub mod button_group;
pub mod spinner;

pub use button::*;
pub use button_group::*;
pub use spinner::*;

//! The button family. One import gives access to every variant:
//!
//! ```ignore
//! use ui::components::buttons::{Button, CancelButton, CheckboxButton, IconButton, SpinnerButton};
//! ```

pub mod button;
pub mod cancel;
pub mod checkbox;
pub mod icon;
pub mod spinner;

pub use button::*;
pub use cancel::*;
pub use checkbox::*;
pub use icon::*;
pub use spinner::*;

//! Page layout shells.

pub mod backdrop;
pub mod dropdown;
pub mod sidebar;

pub use backdrop::*;
pub use dropdown::*;
pub use sidebar::*;

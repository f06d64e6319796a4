//! User Interface Components
//!
//! This module contains the reusable Dioxus components of the design system:
//!
//! - **buttons**: the button family (base, icon, cancel, spinner, checkbox)
//! - **forms**: form controls (submit)
//! - **layout**: page layout shells (sidebar and its sub-components)
//!
//! All components are thin wrappers over the primitives in
//! [`crate::toolkit`], styled through the registry in [`crate::theme`].

pub mod buttons;
pub mod forms;
pub mod layout;

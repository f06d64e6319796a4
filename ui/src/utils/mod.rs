//! Utility Functions and Cross-Cutting Concerns
//!
//! This module provides utilities used throughout the component library:
//!
//! - **class_list**: order-preserving CSS class list builder
//! - **console_macros**: WASM-compatible logging macros for browser console output

pub mod class_list;
pub mod console_macros;

pub use class_list::*;

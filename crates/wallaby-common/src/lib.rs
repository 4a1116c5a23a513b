//! Common utilities for the Wallaby style layer.
//!
//! This crate provides shared infrastructure used by the DOM and style
//! components:
//! - **Warning System** - colored terminal output for defensive fallbacks
//! - **Property Names** - camelCase/hyphenated CSS property name conversion

pub mod name;
pub mod warning;

//! # glimmer-domain
//!
//! Pure domain model for the glimmer light controller.
//!
//! ## Responsibilities
//! - Define the **light state** (power flag + RGB color) shared between the
//!   device side and the control panel
//! - Define the **color value object** with its wire format (3-byte tuple)
//!   and its text format (`#rrggbb`)
//! - Define error conventions (typed errors via `thiserror`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and no IO.
//! It must never import anything from `app`, adapters, or external IO crates.
//! It compiles for both native and wasm targets — the control panel reuses
//! these types in the browser.

pub mod color;
pub mod error;
pub mod light;

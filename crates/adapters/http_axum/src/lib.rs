//! # glimmer-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the device endpoints the control panel talks to:
//!   `GET /state`, `POST /toggle_power`, `POST /set_color/{r}/{g}/{b}`
//! - Serve the compiled control panel (static wasm/html assets)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `glimmer-app` (for the service and port traits) and
//! `glimmer-domain` (for types used in request/response mapping). Never leaks
//! axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

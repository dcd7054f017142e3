//! # glimmer-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the `LightDriver` port that adapters implement (driven/outbound
//!   port): pushing the current light state to whatever renders the light
//! - Provide the `LightService` use-case struct: the single source of truth
//!   for the light state, mutated by the HTTP adapter and pushed through the
//!   driver on every change
//!
//! ## Dependency rule
//! Depends on `glimmer-domain` only (plus `tokio::sync` for the state mutex).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;

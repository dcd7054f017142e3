//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

use std::future::Future;

use glimmer_domain::error::GlimmerError;
use glimmer_domain::light::LightState;

/// Outbound port for rendering the light state onto real (or simulated)
/// hardware.
///
/// Implementations live in adapter crates (e.g. `adapter_virtual`). The
/// service calls [`apply`](Self::apply) after every state change; the driver
/// is expected to make the physical light match the given state.
pub trait LightDriver {
    /// Unique name identifying this driver (e.g. `"virtual"`).
    fn name(&self) -> &'static str;

    /// Push the given state to the light.
    fn apply(&self, state: LightState) -> impl Future<Output = Result<(), GlimmerError>> + Send;
}

use crate::surface::Surface;

/// Compatibility hook for host environments whose drawing surfaces must be
/// registered with an external shim before any instruction touches them.
///
/// The renderer treats this as an injected capability: when a manager is
/// installed it is consulted exactly once per render, with the freshly
/// created off-screen surface, before the first fill. No manager means the
/// branch is skipped entirely; there is no global registry.
pub trait LegacySurfaceManager {
    fn init_surface(&self, surface: &mut Surface);
}

// Force-law constants (pixel units)
// Positions and distances are measured in pixels, one tick is one time unit,
// and every particle has unit mass. Distances below CONTACT_RADIUS are
// hard-core repulsion, the affinity-driven band peaks at PEAK_RADIUS, and
// nothing interacts beyond CUTOFF_RADIUS.

/// Overall scale applied to every force regime
pub const FORCE_SCALE: f64 = 0.8;

/// Short-range band edge: universal repulsion below this distance
pub const CONTACT_RADIUS: f64 = 50.0;

/// Distance at which the affinity-driven force peaks
pub const PEAK_RADIUS: f64 = 140.0;

/// Interaction cutoff: zero force beyond this distance
pub const CUTOFF_RADIUS: f64 = 200.0;

/// Default number of particles in a fresh world
pub const DEFAULT_PARTICLE_COUNT: usize = 550;

/// Default world width in pixels (stand-in for the viewport)
pub const DEFAULT_WIDTH: f64 = 1280.0;

/// Default world height in pixels
pub const DEFAULT_HEIGHT: f64 = 720.0;

/// Bound on each spawn velocity component: components are uniform in
/// [-MAX_SPAWN_SPEED, MAX_SPAWN_SPEED)
pub const MAX_SPAWN_SPEED: f64 = 1.0;

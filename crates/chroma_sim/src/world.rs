//! The simulation world: exclusive owner of the particle population.
//!
//! A tick is two strictly ordered phases. First every unique particle pair
//! exchanges force through the affinity matrix and the piecewise force law,
//! accumulating into velocities. Then every particle integrates its velocity
//! into its position, zeroes the velocity, and re-enters through the torus
//! edges. Velocities never persist across ticks; all motion is rebuilt from
//! forces each step.

use chroma_core::{ConfigError, Particle, SimConfig, Species};
use chroma_physics::{AffinityMatrix, Torus, force, spawn};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Errors that stop a world from being built.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The affinity matrix must define a coefficient for every ordered pair
    /// of species present before the first step can run.
    #[error("affinity matrix covers {actual} species but the population needs {required}")]
    AffinityCoverage { required: usize, actual: usize },
}

/// Read-only particle state handed to external renderers.
#[derive(Debug, Clone, Copy)]
pub struct ParticleView {
    pub x: f64,
    pub y: f64,
    pub species: Species,
}

pub struct World {
    torus: Torus,
    particles: Vec<Particle>,
    affinities: AffinityMatrix,
    rng: ChaCha8Rng,
    tick: u64,
}

impl World {
    /// Build a world from configuration: seeded RNG, fresh affinity matrix,
    /// randomly scattered particles.
    pub fn new(config: &SimConfig) -> Result<Self, WorldError> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let affinities = AffinityMatrix::generate(config.species_count, &mut rng);
        let particles = spawn::scatter(config, &mut rng);

        info!(
            "world ready: {} particles, {} species, {}x{}, seed {}",
            particles.len(),
            config.species_count,
            config.width,
            config.height,
            config.seed
        );

        Ok(Self {
            torus: Torus::new(config.width, config.height),
            particles,
            affinities,
            rng,
            tick: 0,
        })
    }

    /// Build a world from explicit parts (fixed scenarios, tests).
    ///
    /// Applies the same dimension rule as [`SimConfig::validate`] and checks
    /// that the matrix covers every species in `particles`.
    pub fn from_parts(
        width: f64,
        height: f64,
        particles: Vec<Particle>,
        affinities: AffinityMatrix,
        seed: u64,
    ) -> Result<Self, WorldError> {
        if !(width > 0.0 && width.is_finite()) || !(height > 0.0 && height.is_finite()) {
            return Err(ConfigError::BadDimensions { width, height }.into());
        }
        let required = particles
            .iter()
            .map(|p| p.species.index() + 1)
            .max()
            .unwrap_or(0);
        if required > affinities.species_count() {
            return Err(WorldError::AffinityCoverage {
                required,
                actual: affinities.species_count(),
            });
        }

        Ok(Self {
            torus: Torus::new(width, height),
            particles,
            affinities,
            rng: ChaCha8Rng::seed_from_u64(seed),
            tick: 0,
        })
    }

    /// Advance the world by exactly one tick.
    pub fn step(&mut self) {
        self.accumulate_forces();
        self.integrate();
        self.tick += 1;
    }

    /// Phase one: all-pairs force exchange.
    ///
    /// Pairs iterate i < j in ascending index order, each pair visited once.
    /// Both sides share one separation and direction, but each side scales it
    /// by its own affinity lookup: i by `M[s_i][s_j]`, j by `M[s_j][s_i]`.
    /// For equal species the lookups hit the same cell and the exchange is
    /// equal and opposite; for different species it deliberately is not.
    fn accumulate_forces(&mut self) {
        let n = self.particles.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let pi = self.particles[i];
                let pj = self.particles[j];

                let sep = self.torus.separation(pi.x, pi.y, pj.x, pj.y);
                let push_i =
                    force::magnitude(sep.distance, self.affinities.get(pi.species, pj.species));
                let push_j =
                    force::magnitude(sep.distance, self.affinities.get(pj.species, pi.species));

                // Unit vector from j toward i: positive magnitudes separate.
                let ux = sep.angle.cos();
                let uy = sep.angle.sin();

                self.particles[i].vx += push_i * ux;
                self.particles[i].vy += push_i * uy;
                self.particles[j].vx -= push_j * ux;
                self.particles[j].vy -= push_j * uy;
            }
        }
    }

    /// Phase two: integrate positions (unit time step, unit mass), zero the
    /// velocities, re-enter through the edges.
    fn integrate(&mut self) {
        let torus = self.torus;
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vx = 0.0;
            p.vy = 0.0;
            let (x, y) = torus.wrap(p.x, p.y);
            p.x = x;
            p.y = y;
        }
    }

    /// Lazy, restartable view of current particle state for rendering.
    /// Every call starts a fresh single pass.
    pub fn snapshot(&self) -> impl Iterator<Item = ParticleView> + '_ {
        self.particles.iter().map(|p| ParticleView {
            x: p.x,
            y: p.y,
            species: p.species,
        })
    }

    /// Replace the affinity table with a fresh draw from the world's RNG.
    ///
    /// Distinct from stepping: particle state is untouched, only future force
    /// lookups change.
    pub fn reroll_affinities(&mut self) {
        let species_count = self.affinities.species_count();
        self.affinities = AffinityMatrix::generate(species_count, &mut self.rng);
        debug!("affinity matrix rerolled over {species_count} species");
    }

    pub fn width(&self) -> f64 {
        self.torus.width()
    }

    pub fn height(&self) -> f64 {
        self.torus.height()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn affinities(&self) -> &AffinityMatrix {
        &self.affinities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::constants::CONTACT_RADIUS;

    /// Two motionless particles `gap` apart along x, well inside a roomy world.
    fn pair_world(gap: f64, a: Species, b: Species, affinities: AffinityMatrix) -> World {
        let particles = vec![
            Particle::new(400.0, 300.0, 0.0, 0.0, a),
            Particle::new(400.0 + gap, 300.0, 0.0, 0.0, b),
        ];
        World::from_parts(1000.0, 600.0, particles, affinities, 0).unwrap()
    }

    fn gap_x(world: &World) -> f64 {
        let p = world.particles();
        (p[1].x - p[0].x).abs()
    }

    #[test]
    fn test_zero_area_world_rejected() {
        let result = World::from_parts(0.0, 100.0, Vec::new(), AffinityMatrix::uniform(1, 0.0), 0);
        assert!(matches!(
            result,
            Err(WorldError::Config(ConfigError::BadDimensions { .. }))
        ));
    }

    #[test]
    fn test_config_validation_runs_before_build() {
        let config = SimConfig {
            particle_count: 0,
            ..SimConfig::default()
        };
        assert!(matches!(
            World::new(&config),
            Err(WorldError::Config(ConfigError::NoParticles))
        ));
    }

    #[test]
    fn test_affinity_coverage_enforced() {
        let particles = vec![Particle::new(10.0, 10.0, 0.0, 0.0, Species::Purple)];
        let result =
            World::from_parts(100.0, 100.0, particles, AffinityMatrix::uniform(2, 0.0), 0);
        assert!(matches!(
            result,
            Err(WorldError::AffinityCoverage {
                required: 6,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_same_seed_worlds_stay_bit_identical() {
        let config = SimConfig {
            particle_count: 60,
            width: 400.0,
            height: 300.0,
            seed: 1234,
            ..SimConfig::default()
        };
        let mut first = World::new(&config).unwrap();
        let mut second = World::new(&config).unwrap();

        for _ in 0..25 {
            first.step();
            second.step();
        }

        assert_eq!(first.particles(), second.particles());
    }

    #[test]
    fn test_step_is_deterministic_from_fixed_state() {
        let build = || {
            let particles = vec![
                Particle::new(100.0, 100.0, 0.0, 0.0, Species::Red),
                Particle::new(160.0, 120.0, 0.0, 0.0, Species::Orange),
                Particle::new(140.0, 260.0, 0.0, 0.0, Species::Red),
            ];
            let mut affinities = AffinityMatrix::uniform(2, 0.25);
            affinities.set(Species::Orange, Species::Red, -0.75);
            World::from_parts(500.0, 400.0, particles, affinities, 0).unwrap()
        };

        let mut first = build();
        let mut second = build();
        for _ in 0..10 {
            first.step();
            second.step();
        }

        assert_eq!(first.particles(), second.particles());
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        let config = SimConfig {
            particle_count: 40,
            width: 300.0,
            height: 200.0,
            seed: 7,
            ..SimConfig::default()
        };
        let mut world = World::new(&config).unwrap();

        for _ in 0..50 {
            world.step();
            for p in world.snapshot() {
                assert!((0.0..world.width()).contains(&p.x), "x out of bounds: {}", p.x);
                assert!((0.0..world.height()).contains(&p.y), "y out of bounds: {}", p.y);
            }
        }
    }

    #[test]
    fn test_velocities_zeroed_after_step() {
        let config = SimConfig {
            particle_count: 12,
            width: 300.0,
            height: 200.0,
            seed: 5,
            ..SimConfig::default()
        };
        let mut world = World::new(&config).unwrap();
        world.step();
        for p in world.particles() {
            assert_eq!(p.vx, 0.0);
            assert_eq!(p.vy, 0.0);
        }
    }

    #[test]
    fn test_same_species_exchange_is_equal_and_opposite() {
        let mut world = pair_world(80.0, Species::Red, Species::Red, AffinityMatrix::uniform(1, 0.6));
        let before: Vec<Particle> = world.particles().to_vec();
        world.step();
        let after = world.particles();

        let delta_0 = after[0].x - before[0].x;
        let delta_1 = after[1].x - before[1].x;
        assert!(delta_0 < 0.0);
        assert!((delta_0 + delta_1).abs() < 1e-12);
    }

    #[test]
    fn test_cross_species_exchange_is_asymmetric() {
        // Red flees Orange, Orange chases Red: both sides read their own
        // coefficient, so the pair violates the equal-and-opposite rule.
        let mut affinities = AffinityMatrix::uniform(2, 0.0);
        affinities.set(Species::Red, Species::Orange, 1.0);
        affinities.set(Species::Orange, Species::Red, -1.0);

        let mut world = pair_world(100.0, Species::Red, Species::Orange, affinities);
        let before: Vec<Particle> = world.particles().to_vec();
        world.step();
        let after = world.particles();

        let delta_0 = after[0].x - before[0].x;
        let delta_1 = after[1].x - before[1].x;
        // Both move in the same world direction (a chase), not opposite ones.
        assert!(delta_0 < 0.0);
        assert!(delta_1 < 0.0);
        assert_ne!(delta_0, -delta_1);
    }

    #[test]
    fn test_neutral_pair_relaxes_to_contact_radius() {
        // Zero affinity everywhere: only short-range repulsion acts. The pair
        // separates monotonically and stalls at the contact radius, because
        // momentum dies with the per-tick velocity reset.
        let mut world = pair_world(30.0, Species::Red, Species::Red, AffinityMatrix::uniform(1, 0.0));

        let mut previous = gap_x(&world);
        for _ in 0..500 {
            world.step();
            let current = gap_x(&world);
            assert!(current >= previous, "pair moved back together");
            assert!(current <= CONTACT_RADIUS, "repulsion overshot the contact radius");
            previous = current;
        }
        assert!(previous > CONTACT_RADIUS - 1e-3);

        let resting = gap_x(&world);
        world.step();
        assert!((gap_x(&world) - resting).abs() < 1e-6);
    }

    #[test]
    fn test_beyond_cutoff_pair_never_moves() {
        let mut world = pair_world(250.0, Species::Red, Species::Red, AffinityMatrix::uniform(1, 0.9));
        let before: Vec<Particle> = world.particles().to_vec();
        for _ in 0..10 {
            world.step();
        }
        assert_eq!(world.particles(), before.as_slice());
    }

    #[test]
    fn test_pair_interacts_through_the_seam() {
        // 30 apart through the x seam: short-range repulsion must act even
        // though the direct distance is far beyond the cutoff.
        let particles = vec![
            Particle::new(5.0, 300.0, 0.0, 0.0, Species::Red),
            Particle::new(975.0, 300.0, 0.0, 0.0, Species::Red),
        ];
        let mut world = World::from_parts(
            1000.0,
            600.0,
            particles,
            AffinityMatrix::uniform(1, 0.0),
            0,
        )
        .unwrap();

        world.step();
        let p = world.particles();
        // Repulsion pushes them apart across the seam: 5 moves right, 975 left.
        assert!(p[0].x > 5.0);
        assert!(p[1].x < 975.0);
    }

    #[test]
    fn test_snapshot_is_restartable_and_complete() {
        let config = SimConfig {
            particle_count: 30,
            width: 300.0,
            height: 200.0,
            ..SimConfig::default()
        };
        let world = World::new(&config).unwrap();

        let first: Vec<(f64, f64)> = world.snapshot().map(|p| (p.x, p.y)).collect();
        let second: Vec<(f64, f64)> = world.snapshot().map(|p| (p.x, p.y)).collect();

        assert_eq!(first.len(), world.particle_count());
        assert_eq!(first, second);
    }

    #[test]
    fn test_reroll_replaces_matrix_but_not_particles() {
        let config = SimConfig {
            particle_count: 25,
            width: 300.0,
            height: 200.0,
            seed: 11,
            ..SimConfig::default()
        };
        let mut world = World::new(&config).unwrap();
        let particles_before: Vec<Particle> = world.particles().to_vec();
        let matrix_before = world.affinities().clone();

        world.reroll_affinities();

        assert_eq!(world.particles(), particles_before.as_slice());
        let changed = Species::ALL.iter().any(|&a| {
            Species::ALL
                .iter()
                .any(|&b| world.affinities().get(a, b) != matrix_before.get(a, b))
        });
        assert!(changed, "reroll drew an identical matrix");
    }
}

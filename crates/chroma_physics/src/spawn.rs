use chroma_core::{MAX_SPAWN_SPEED, Particle, SimConfig, Species};
use rand::Rng;

/// Scatter a fresh particle population across the world.
///
/// Positions are uniform over the torus, velocity components uniform in
/// [-MAX_SPAWN_SPEED, MAX_SPAWN_SPEED), species uniform over the configured
/// subset. Particles are created once per run and never destroyed.
pub fn scatter(config: &SimConfig, rng: &mut impl Rng) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(config.particle_count);
    for _ in 0..config.particle_count {
        particles.push(random_particle(config, rng));
    }
    particles
}

fn random_particle(config: &SimConfig, rng: &mut impl Rng) -> Particle {
    let x = rng.gen_range(0.0..config.width);
    let y = rng.gen_range(0.0..config.height);
    let vx = rng.gen_range(-MAX_SPAWN_SPEED..MAX_SPAWN_SPEED);
    let vy = rng.gen_range(-MAX_SPAWN_SPEED..MAX_SPAWN_SPEED);
    let species = Species::ALL[rng.gen_range(0..config.species_count)];
    Particle::new(x, y, vx, vy, species)
}

//! Headless driver: build a world from CLI flags, run the tick loop, report.
//!
//! The loop observes before it steps, the render-then-step cadence the
//! simulation core expects from its host. Rendering itself lives outside this
//! repository; `--interval-ms 10` approximates an interactive frame rate.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use chroma_core::{DEFAULT_HEIGHT, DEFAULT_PARTICLE_COUNT, DEFAULT_WIDTH, SimConfig, Species};
use chroma_physics::Torus;
use chroma_sim::World;

#[derive(Parser, Debug)]
#[command(name = "chroma", about = "Particle-life simulation on a toroidal 2D world")]
struct Args {
    /// Number of particles
    #[arg(long, default_value_t = DEFAULT_PARTICLE_COUNT)]
    particles: usize,

    /// Number of species in play (1-6)
    #[arg(long, default_value_t = Species::COUNT)]
    species: usize,

    /// World width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: f64,

    /// World height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: f64,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to run
    #[arg(long, default_value_t = 2000)]
    steps: u64,

    /// Wall-clock pacing between ticks in milliseconds (0 = free-running)
    #[arg(long, default_value_t = 0)]
    interval_ms: u64,

    /// Log an observation every this many ticks (0 = never)
    #[arg(long, default_value_t = 200)]
    report_every: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = SimConfig {
        particle_count: args.particles,
        species_count: args.species,
        width: args.width,
        height: args.height,
        seed: args.seed,
    };

    let mut world = World::new(&config)?;

    for _ in 0..args.steps {
        if args.report_every > 0 && world.tick() % args.report_every == 0 {
            log::info!(
                "tick {:>6}: mean nearest-neighbor distance {:.2}",
                world.tick(),
                mean_nearest_neighbor(&world)
            );
        }
        world.step();
        if args.interval_ms > 0 {
            thread::sleep(Duration::from_millis(args.interval_ms));
        }
    }

    print_census(&world);
    Ok(())
}

/// Mean distance from each particle to its nearest neighbor over the torus.
/// Falling values mean clustering; uniform scatter is the baseline.
fn mean_nearest_neighbor(world: &World) -> f64 {
    let torus = Torus::new(world.width(), world.height());
    let points: Vec<(f64, f64)> = world.snapshot().map(|p| (p.x, p.y)).collect();
    if points.len() < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    for (i, &(xi, yi)) in points.iter().enumerate() {
        let mut nearest = f64::INFINITY;
        for (j, &(xj, yj)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let distance = torus.separation(xi, yi, xj, yj).distance;
            if distance < nearest {
                nearest = distance;
            }
        }
        total += nearest;
    }
    total / points.len() as f64
}

fn print_census(world: &World) {
    let mut counts = [0usize; Species::COUNT];
    for p in world.snapshot() {
        counts[p.species.index()] += 1;
    }

    println!("final census after {} ticks:", world.tick());
    for species in Species::ALL {
        let count = counts[species.index()];
        if count > 0 {
            println!("  {:>7}: {}", species.name(), count);
        }
    }
}

pub mod world;

pub use world::{ParticleView, World, WorldError};

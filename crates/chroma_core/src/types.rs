use serde::{Deserialize, Serialize};

/// Particle species, named by render color.
///
/// The discriminant doubles as the row/column index into the affinity matrix.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Red = 0,
    Orange = 1,
    Yellow = 2,
    Green = 3,
    Blue = 4,
    Purple = 5,
}

impl Species {
    /// Number of distinct species
    pub const COUNT: usize = 6;

    /// All species in index order
    pub const ALL: [Species; Species::COUNT] = [
        Species::Red,
        Species::Orange,
        Species::Yellow,
        Species::Green,
        Species::Blue,
        Species::Purple,
    ];

    /// Index into the affinity matrix
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }

    /// Color for rendering this species [r, g, b, a]
    pub fn color(self) -> [f32; 4] {
        match self {
            Self::Red => [1.0, 0.0, 0.0, 1.0],
            Self::Orange => [1.0, 0.65, 0.0, 1.0],
            Self::Yellow => [1.0, 1.0, 0.0, 1.0],
            Self::Green => [0.0, 0.5, 0.0, 1.0],
            Self::Blue => [0.0, 0.0, 1.0, 1.0],
            Self::Purple => [0.5, 0.0, 0.5, 1.0],
        }
    }
}

/// A single particle.
///
/// Velocity is a per-tick accumulator, not persistent momentum: forces build
/// it up during a step and integration zeroes it again. Mass is implicitly 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub species: Species,
}

impl Particle {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, species: Species) -> Self {
        Self { x, y, vx, vy, species }
    }
}

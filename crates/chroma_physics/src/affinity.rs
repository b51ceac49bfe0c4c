use chroma_core::Species;
use rand::Rng;

/// Affinity coefficients between ordered species pairs.
///
/// `get(a, b)` is the coefficient particle species `a` uses when it meets
/// `b`: through the force law, positive values drive `a` away from `b` and
/// negative values draw it in. The table is *not* symmetric: `get(a, b)` and
/// `get(b, a)` are independent draws, which is what produces chasing and
/// orbiting instead of settling into equilibrium.
#[derive(Debug, Clone)]
pub struct AffinityMatrix {
    /// Flattened row-major: `a.index() * species_count + b.index()`
    coefficients: Vec<f64>,
    species_count: usize,
}

impl AffinityMatrix {
    /// Draw a fresh table, each coefficient uniform in [-1, 1).
    pub fn generate(species_count: usize, rng: &mut impl Rng) -> Self {
        let mut coefficients = Vec::with_capacity(species_count * species_count);
        for _ in 0..species_count * species_count {
            coefficients.push(rng.gen_range(-1.0..1.0));
        }
        Self {
            coefficients,
            species_count,
        }
    }

    /// Table with every coefficient set to `value` (fixed scenarios, tests).
    pub fn uniform(species_count: usize, value: f64) -> Self {
        Self {
            coefficients: vec![value; species_count * species_count],
            species_count,
        }
    }

    /// Coefficient `a` uses when it meets `b`. Read-only after generation.
    pub fn get(&self, a: Species, b: Species) -> f64 {
        self.coefficients[a.index() * self.species_count + b.index()]
    }

    /// Overwrite one ordered-pair coefficient.
    pub fn set(&mut self, a: Species, b: Species, value: f64) {
        self.coefficients[a.index() * self.species_count + b.index()] = value;
    }

    /// Number of species the table covers.
    pub fn species_count(&self) -> usize {
        self.species_count
    }
}

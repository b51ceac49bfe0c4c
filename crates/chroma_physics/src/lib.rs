pub mod affinity;
pub mod force;
pub mod spawn;
pub mod torus;

pub use affinity::AffinityMatrix;
pub use force::{Regime, magnitude};
pub use spawn::scatter;
pub use torus::{Separation, Torus};

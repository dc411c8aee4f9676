pub mod hull;
mod planar_cycle;
pub mod query;

pub use planar_cycle::{HamiltonianCycle, PlanarCycle};

mod join;
mod peel;

pub use join::JoinHulls;
pub use peel::PeelHulls;

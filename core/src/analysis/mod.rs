pub use plan::*;
pub use solver::*;

mod plan;
mod solver;

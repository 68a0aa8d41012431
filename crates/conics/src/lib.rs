//! Conic sections cut from a double cone by a tilted plane.

pub mod cone;
pub mod section;
pub mod solver;

pub use cone::{Cone, CuttingPlane, SliceExample};
pub use section::{ConicKind, ConicParams, ConicSection};
pub use solver::{ConicError, ConicSectionSolver, solve};

//! Generic structures, not tied to the solver.

pub mod random;

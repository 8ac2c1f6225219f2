//! Items not elsewhere, e.g. log targets.

pub mod log;

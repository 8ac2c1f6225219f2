/// Representation for the probability of choosing `true`.
pub type PolarityLean = f64;

/*!
Methods for choosing the atom to flip within a clause.

# Overview

The probSAT heuristic biases the choice of flip toward atoms whose flip
repairs more clauses than it damages, without ever ruling an atom out.
Given a falsified clause, each literal of the clause receives the score

> make<sup>cm</sup> / (ε + break)<sup>cb</sup>

where *make* and *break* are the
[make/break counts](crate::structures::formula::Formula::make_break_counts)
of the literal's atom on the current valuation, and *cm*, *cb*, ε are the
[make_exponent](crate::config::Config::make_exponent),
[break_exponent](crate::config::Config::break_exponent), and
[epsilon](crate::config::Config::epsilon) of the configuration.

As ε is strictly positive every score is strictly positive, and so the
scores normalise to a categorical distribution over the positions of the
clause.
One position is sampled from the distribution, and the atom at that position
is the atom to flip.

# The default parameterisation

With the default *cm* = 0 the numerator is 1 for *any* make count --- IEEE
`powf` takes 0⁰ = 1 --- and the heuristic degenerates to pure break
minimisation.
This is the intended default of the heuristic, not an artefact, and the 0⁰
convention is relied on.

# Sampling

The sample is by inversion: a single uniform draw from [0, 1) is compared
against the cumulative distribution, walking the clause in order.
So, the probability of returning the atom at a position is exactly the
normalised score of that position, and every draw consumes exactly one
`f64` from the rng of the context.
*/

use crate::{
    context::GenericContext,
    misc::log::targets,
    structures::{atom::Atom, literal::Literal},
};

impl<R: rand::Rng> GenericContext<R> {
    /// The flip distribution of the clause at the given index: the
    /// normalised score of each literal position, in clause order.
    ///
    /// Scoring queries the make/break counts of every atom of the clause,
    /// and so briefly toggles values on the valuation of the context ---
    /// though the valuation is the same on return.
    pub fn flip_distribution(&mut self, clause_index: usize) -> Vec<f64> {
        let cm = self.config.make_exponent.value;
        let cb = self.config.break_exponent.value;
        let epsilon = self.config.epsilon.value;

        let clause = self.formula.clause(clause_index);
        let mut scores = Vec::with_capacity(clause.len());

        for literal in clause {
            let (make, break_) = self
                .formula
                .make_break_counts(literal.atom(), &mut self.valuation);

            scores.push((make as f64).powf(cm) / (epsilon + break_ as f64).powf(cb));
        }

        let total: f64 = scores.iter().sum();
        for score in scores.iter_mut() {
            *score /= total;
        }

        scores
    }

    /// The atom to flip for the clause at the given index, sampled from the
    /// [flip distribution](GenericContext::flip_distribution) of the clause.
    ///
    /// The returned atom always belongs to the clause.
    pub fn choose_flip_atom(&mut self, clause_index: usize) -> Atom {
        let distribution = self.flip_distribution(clause_index);
        let roll: f64 = self.rng.random();

        let clause = self.formula.clause(clause_index);

        let mut cumulative = 0.0;
        for (position, weight) in distribution.iter().enumerate() {
            cumulative += weight;
            if roll < cumulative {
                log::trace!(target: targets::SCORE, "Sampled position {position} of clause {clause_index}");
                return clause[position].atom();
            }
        }

        // Rounding may leave the full cumulative weight a hair below one.
        clause[clause.len() - 1].atom()
    }
}

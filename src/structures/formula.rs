/*!
A formula 𝐅 --- an ordered collection of [clauses](super::clause),
interpreted as the conjunction of those clauses.

A formula is built once, either [from a reader](crate::builder) or
[directly](Formula::new), and never mutated afterwards.
So, a formula may be shared (by reference) across any number of independent
solver runs without synchronisation --- each run owns its valuation and
counters, and only reads the formula.

Along with the clauses a formula records the count of atoms of the language
it is expressed in.
The count is taken from the problem specification of the source text rather
than from the clauses themselves, as atoms without an occurrence still take
part in a valuation.

# Make/break counts

[make_break_counts](Formula::make_break_counts) supports the probSAT
heuristic: for a given atom it answers how many clauses would transition
unsatisfied → satisfied (*make*) and satisfied → unsatisfied (*break*) if the
value of the atom were flipped on the given valuation.

The counts are obtained by flipping the atom, evaluating every clause against
both the original and the hypothetical valuation, and flipping the atom back.
Each call is O(formula size × clause width), and a scored flip queries every
atom of a clause --- this cost is intrinsic to the heuristic, which wants the
counts relative to the *current* valuation on every step.
An incremental occurrence-list cache would be observationally equivalent, and
is deliberately not taken up here.
*/

use crate::structures::{
    atom::Atom,
    clause::{CClause, Clause},
    valuation::{CValuation, Valuation},
};

/// An immutable formula: clauses in order of addition, and a count of atoms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formula {
    /// A count of the atoms of the language of the formula.
    atom_count: usize,

    /// The clauses of the formula.
    clauses: Vec<CClause>,
}

impl Formula {
    /// A formula made of the given clauses, expressed over `atom_count`
    /// atoms.
    pub fn new(atom_count: usize, clauses: Vec<CClause>) -> Self {
        Formula {
            atom_count,
            clauses,
        }
    }

    /// A count of the atoms of the language of the formula.
    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    /// A count of the clauses of the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The clauses of the formula, in order.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// The clause at the given index.
    pub fn clause(&self, index: usize) -> &CClause {
        &self.clauses[index]
    }

    /// A fresh valuation for the formula with every atom valued `false`.
    pub fn blank_valuation(&self) -> CValuation {
        vec![false; self.atom_count]
    }

    /// Whether every clause of the formula is satisfied on the given
    /// valuation.
    ///
    /// Short-circuits on the first falsified clause found.
    pub fn satisfied_on(&self, valuation: &CValuation) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.satisfied_on(valuation))
    }

    /// The indices of every clause falsified on the given valuation, in
    /// ascending order.
    ///
    /// In contrast to [satisfied_on](Formula::satisfied_on) the scan is
    /// exhaustive: the complete collection is used both for the count of
    /// satisfied clauses and for the uniform pick of a clause to repair.
    pub fn unsatisfied_clauses(&self, valuation: &CValuation) -> Vec<usize> {
        self.clauses
            .iter()
            .enumerate()
            .filter(|(_, clause)| !clause.satisfied_on(valuation))
            .map(|(index, _)| index)
            .collect()
    }

    /// The make/break counts of the given atom on the given valuation.
    ///
    /// Returns a pair `(make, break)`:
    /// - *make* is a count of clauses which are falsified on the valuation
    ///   and satisfied on the valuation with the value of `atom` flipped.
    /// - *break* is a count of clauses satisfied on the valuation and
    ///   falsified with the value of `atom` flipped.
    ///
    /// The valuation is the same before and after the call --- the flip made
    /// to evaluate the hypothetical is always undone.
    pub fn make_break_counts(&self, atom: Atom, valuation: &mut CValuation) -> (usize, usize) {
        let mut make = 0;
        let mut break_ = 0;

        for clause in &self.clauses {
            let before = clause.satisfied_on(valuation);

            valuation.flip(atom);
            let after = clause.satisfied_on(valuation);
            valuation.flip(atom);

            match (before, after) {
                (false, true) => make += 1,
                (true, false) => break_ += 1,
                _ => {}
            }
        }

        (make, break_)
    }

    /// The formula in DIMACS form, one clause per line with terminating
    /// zeros, preceded by a problem specification line.
    pub fn as_dimacs(&self) -> String {
        let mut string = format!("p cnf {} {}\n", self.atom_count, self.clauses.len());
        for clause in &self.clauses {
            string.push_str(&clause.as_dimacs(true));
            string.push('\n');
        }
        string
    }
}

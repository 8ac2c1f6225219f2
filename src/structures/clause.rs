//! Clauses, aka. a collection of literals, interpreted as the disjunction of
//! those literals.
//!
//! The canonical representation of a clause is a vector of literals, and the
//! order of literals in that vector is significant: the weighted sampler
//! addresses literals by their position in the clause (see
//! [score](crate::procedures::score)).
//!
//! ```rust
//! # use stoat_sat::structures::clause::Clause;
//! # use stoat_sat::structures::literal::{CLiteral, Literal};
//! let clause = vec![CLiteral::new(1, true), CLiteral::new(2, false)];
//!
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.as_dimacs(true), "1 -2 0");
//!
//! let valuation = vec![false, true];
//! assert!(!clause.satisfied_on(&valuation));
//!
//! let valuation = vec![false, false];
//! assert!(clause.satisfied_on(&valuation));
//! ```
//!
//! - The empty clause is always false (never true), though no clause of a
//!   parsed formula is empty --- see [builder](crate::builder).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::CValuation,
};

use super::valuation::Valuation;

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as
    /// optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over the literals in the clause, in clause order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over the atoms in the clause, in clause order.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether at least one literal of the clause has the polarity of its
    /// atom on the given valuation.
    ///
    /// Short-circuits on the first satisfying literal found.
    fn satisfied_on(&self, valuation: &CValuation) -> bool;
}

impl<T: AsRef<[CLiteral]> + ?Sized> Clause for T {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut string = self
            .as_ref()
            .iter()
            .map(|literal| format!("{} ", literal.as_int()))
            .collect::<String>();
        match zero {
            true => string.push('0'),
            false => {
                string.pop();
            }
        };
        string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.as_ref().iter()
    }

    fn size(&self) -> usize {
        self.as_ref().len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.as_ref().iter().map(|literal| literal.atom())
    }

    fn satisfied_on(&self, valuation: &CValuation) -> bool {
        self.as_ref()
            .iter()
            .any(|literal| valuation.value_of(literal.atom()) == literal.polarity())
    }
}

/*!
A (total) function from atoms to truth values.

The canonical representation of a valuation is a vector of booleans whose
length is the number of atoms of interest, where index *a* − 1 holds the
value of atom *a*.

In contrast to solvers which build a valuation step by step, a local search
always works with a *total* valuation: every atom has a value from the moment
a turn begins, and a flip only ever exchanges one value for its complement.
So, no optional values, and no notion of an unvalued atom.

```rust
# use stoat_sat::structures::valuation::Valuation;
let mut valuation = vec![true, false, true];

assert_eq!(valuation.value_of(2), false);
valuation.flip(2);
assert_eq!(valuation.value_of(2), true);
assert_eq!(valuation.atom_count(), 3);
```

# Soundness

The value of an atom is read by using the atom as an index, and so any
structure dereferencing to a slice of booleans supports the trait.
There is no structural guarantee the slice is long enough for the atom asked
about --- methods panic on an atom outside the valuation, and keeping atoms
within bounds is up to whoever built the formula (see
[builder](crate::builder)).
*/

use crate::structures::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<bool>;

/// A valuation is something which stores some value for each atom of
/// interest.
pub trait Valuation {
    /// The value of the given atom under the valuation.
    fn value_of(&self, atom: Atom) -> bool;

    /// Sets the value of the given atom.
    fn set_value(&mut self, atom: Atom, value: bool);

    /// Exchanges the value of the given atom for its complement.
    fn flip(&mut self, atom: Atom);

    /// A count of all the atoms in the valuation.
    fn atom_count(&self) -> usize;

    /// The valuation written as a sequence of integer literals, in atom
    /// order: `1 -2 3 …`.
    fn as_display_string(&self) -> String;
}

impl<T: AsRef<[bool]> + AsMut<[bool]> + ?Sized> Valuation for T {
    fn value_of(&self, atom: Atom) -> bool {
        self.as_ref()[atom as usize - 1]
    }

    fn set_value(&mut self, atom: Atom, value: bool) {
        self.as_mut()[atom as usize - 1] = value;
    }

    fn flip(&mut self, atom: Atom) {
        let slice = self.as_mut();
        slice[atom as usize - 1] = !slice[atom as usize - 1];
    }

    fn atom_count(&self) -> usize {
        self.as_ref().len()
    }

    fn as_display_string(&self) -> String {
        self.as_ref()
            .iter()
            .enumerate()
            .map(|(index, value)| match value {
                true => format!("{}", index + 1),
                false => format!("-{}", index + 1),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

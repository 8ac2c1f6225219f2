/*!
(The internal representation of) an atom, aka. a 'variable'.

Atoms are things to which assigning a (boolean) value is of interest.

Each atom is a u32 *u* with 1 ≤ *u* ≤ [ATOM_MAX].
Atoms are contiguous from 1, and so the value of atom *a* on a valuation may
be identified with the contents of index *a* − 1 of a vector of booleans ---
see [valuation](crate::structures::valuation).

# Notes
- In the SAT literature these are often called 'variables' while in the logic
  literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, bounded so every atom has a signed
/// integer literal form.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();

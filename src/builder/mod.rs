/*!
Tools for building a formula.

# Basic methods

A formula may be built directly, by bundling
[literals](crate::structures::literal::CLiteral) into
[clauses](crate::structures::clause::CClause) and handing the clauses to
[Formula::new](crate::structures::formula::Formula::new):

```rust
# use stoat_sat::structures::formula::Formula;
# use stoat_sat::structures::literal::{CLiteral, Literal};
let clause_a = vec![CLiteral::new(1, true), CLiteral::new(2, false)];
let clause_b = vec![CLiteral::new(1, false), CLiteral::new(2, true)];

let formula = Formula::new(2, vec![clause_a, clause_b]);
assert_eq!(formula.clause_count(), 2);
```

# Reading a formula

[from_reader](crate::structures::formula::Formula::from_reader) reads the
fixed-layout DIMACS of the SATLIB uniform random benchmark distributions ---
see [dimacs] for the layout.
*/

pub mod dimacs;

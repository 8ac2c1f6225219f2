/*!
The context --- a formula together with the state of a search over valuations
of the formula.

Strictly, a [GenericContext] and a [Context].

The generic context is designed to be generic over various parameters.
Though, for the moment this is limited to the source of randomness.

Still, this helps distinguish generic context methods against those intended
for external use or a particular application.
In particular, [from_config](Context::from_config) is implemented for a
context rather than a generic context to avoid requiring a source of
randomness to be supplied alongside a config.

# Example

```rust
# use stoat_sat::config::Config;
# use stoat_sat::context::Context;
# use stoat_sat::reports::Report;
# use stoat_sat::structures::formula::Formula;
# use stoat_sat::structures::literal::{CLiteral, Literal};
let p = 1;
let q = 2;

let formula = Formula::new(
    2,
    vec![
        vec![CLiteral::new(p, true), CLiteral::new(q, true)],
        vec![CLiteral::new(p, false), CLiteral::new(q, true)],
    ],
);

let mut the_context = Context::from_config(Config::default(), formula).unwrap();

assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);
assert!(the_context.formula().satisfied_on(the_context.best_assignment()));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
///
/// A solve moves `Input → Initializing → Flipping`, cycling back to
/// `Initializing` with each turn, until a terminal state is reached:
/// `Satisfied` if a satisfying valuation was found, and `BudgetExhausted` if
/// every turn and flip was consumed without one.
#[derive(Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows configuration and input, and no solve has begun.
    Input,

    /// A turn is being set up with a fresh random valuation.
    Initializing,

    /// Flips are being made within a turn.
    Flipping,

    /// The current valuation satisfies the formula.
    Satisfied,

    /// All turns and flips were consumed without satisfying the formula.
    BudgetExhausted,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Initializing => write!(f, "Initializing"),
            Self::Flipping => write!(f, "Flipping"),
            Self::Satisfied => write!(f, "Satisfied"),
            Self::BudgetExhausted => write!(f, "BudgetExhausted"),
        }
    }
}

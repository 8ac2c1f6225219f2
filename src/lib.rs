//! A library for searching for satisfying assignments of boolean formulas written in conjunctive normal form.
//!
//! stoat_sat implements probSAT, a stochastic local-search heuristic: from a random valuation the
//! solver repeatedly picks some falsified clause and flips an atom of the clause, with atoms sampled
//! in proportion to a score built from how many clauses the flip would repair (*make*) and how many
//! it would damage (*break*).
//!
//! The solver is *incomplete*: it may find a satisfying valuation, and it may exhaust its budget
//! without one, but it can never establish that no satisfying valuation exists.
//! There is no clause learning, no resolution, and no propagation --- just scored flips and
//! restarts.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context is built from a [configuration](crate::config) and a [formula](crate::structures::formula),
//! with the formula either read from [fixed-layout DIMACS](crate::builder) or put together
//! programatically.
//! A solve is then a single call, with results read back from the context:
//!
//! ```rust
//! # use stoat_sat::config::Config;
//! # use stoat_sat::context::Context;
//! # use stoat_sat::reports::Report;
//! # use stoat_sat::structures::formula::Formula;
//! let mut text = String::new();
//! for _ in 0..7 {
//!     text.push_str("c\n");
//! }
//! text.push_str("p cnf 3 3\n");
//! text.push_str(" 1  2 -3 0\n");
//! text.push_str("-1  2  3 0\n");
//! text.push_str(" 1 -2  3 0\n");
//!
//! let formula = Formula::from_reader(text.as_bytes()).unwrap();
//! let mut the_context = Context::from_config(Config::default(), formula).unwrap();
//!
//! the_context.solve().unwrap();
//!
//! if the_context.report() == Report::Satisfiable {
//!     let model = the_context.best_assignment();
//!     assert!(the_context.formula().satisfied_on(model));
//! }
//! ```
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [scorer](crate::procedures::score) for the make/break heuristic itself.
//! - The [structures] to familiarise yourself with the abstract elements of a solve and their
//!   representation (formulas, clauses, valuations, etc.)
//! - The [configuration](crate::config) for the tunable parameters and their defaults.
//!
//! If you're in search of cnf formulas consider the SATLIB benchmark problems at
//! [www.cs.ubc.ca/~hoos/SATLIB/benchm.html](https://www.cs.ubc.ca/~hoos/SATLIB/benchm.html) ---
//! the [reader](crate::builder) expects the layout of the uniform random distributions.
//!
//! # Randomness
//!
//! Every draw of a solve routes through the rng owned by the context, and a context may be built
//! over any [Rng](rand::Rng) --- see [GenericContext](crate::context::GenericContext).
//! With the bundled [MinimalPCG32](crate::generic::random::MinimalPCG32) and a fixed seed a solve
//! is deterministic: the same formula, configuration, and seed give the same flips, the same
//! counters, and the same assignment.
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made under the targets listed in
//! [misc::log], and logging is only built on request.
//! No log implementation is provided.
//!
//! # Literature
//!
//! The heuristic is from Balint and Schöning,
//! [*Choosing probability distributions for stochastic local search and the role of make versus
//! break*](https://doi.org/10.1007/978-3-642-31612-8_3) (SAT 2012).

pub mod procedures;

pub mod builder;
pub mod config;
pub mod context;
pub mod reports;
pub mod structures;
pub mod types;

pub mod generic;

pub mod misc;

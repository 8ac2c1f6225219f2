use proptest::prelude::*;

use stoat_sat::{
    config::Config,
    context::Context,
    structures::{
        clause::{CClause, Clause},
        formula::Formula,
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
};

fn arbitrary_clause(atom_count: u32) -> impl Strategy<Value = CClause> {
    proptest::collection::vec((1..=atom_count, any::<bool>()), 1..=4).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(atom, polarity)| CLiteral::new(atom, polarity))
            .collect()
    })
}

fn arbitrary_instance() -> impl Strategy<Value = (Formula, CValuation)> {
    (1..=8_u32).prop_flat_map(|atom_count| {
        (
            proptest::collection::vec(arbitrary_clause(atom_count), 1..=10),
            proptest::collection::vec(any::<bool>(), atom_count as usize),
        )
            .prop_map(move |(clauses, valuation)| {
                (Formula::new(atom_count as usize, clauses), valuation)
            })
    })
}

proptest! {
    /// The valuation is exactly as it was after a make/break query.
    #[test]
    fn make_break_restores_the_valuation(
        (formula, mut valuation) in arbitrary_instance(),
        atom_choice in any::<proptest::sample::Index>(),
    ) {
        let atom = (atom_choice.index(formula.atom_count()) + 1) as u32;
        let before = valuation.clone();

        formula.make_break_counts(atom, &mut valuation);

        prop_assert_eq!(before, valuation);
    }

    /// A clause is satisfied exactly when some literal of the clause has the
    /// polarity of its atom.
    #[test]
    fn clause_satisfaction_is_polarity_agreement(
        (formula, valuation) in arbitrary_instance(),
    ) {
        for clause in formula.clauses() {
            let agreement = clause
                .literals()
                .any(|literal| valuation.value_of(literal.atom()) == literal.polarity());

            prop_assert_eq!(clause.satisfied_on(&valuation), agreement);
        }
    }

    /// Flipping an atom leaves every clause without the atom exactly as it
    /// was.
    #[test]
    fn a_flip_is_local_to_clauses_with_the_atom(
        (formula, mut valuation) in arbitrary_instance(),
        atom_choice in any::<proptest::sample::Index>(),
    ) {
        let atom = (atom_choice.index(formula.atom_count()) + 1) as u32;

        let before = formula
            .clauses()
            .iter()
            .map(|clause| clause.satisfied_on(&valuation))
            .collect::<Vec<_>>();

        valuation.flip(atom);

        for (clause, was_satisfied) in formula.clauses().iter().zip(before) {
            if !clause.atoms().any(|a| a == atom) {
                prop_assert_eq!(clause.satisfied_on(&valuation), was_satisfied);
            }
        }
    }

    /// Every flip distribution is a probability distribution: strictly
    /// positive weights summing to one.
    #[test]
    fn flip_distributions_are_distributions(
        (formula, valuation) in arbitrary_instance(),
    ) {
        let clause_count = formula.clause_count();
        let mut ctx = Context::from_config(Config::default(), formula).unwrap();
        ctx.valuation = valuation;

        for clause_index in 0..clause_count {
            let distribution = ctx.flip_distribution(clause_index);

            prop_assert_eq!(distribution.len(), ctx.formula().clause(clause_index).size());

            for weight in &distribution {
                prop_assert!(*weight > 0.0);
            }

            let total: f64 = distribution.iter().sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
        }
    }

    /// The sampled atom always belongs to the queried clause.
    #[test]
    fn sampled_atoms_belong_to_the_clause(
        (formula, valuation) in arbitrary_instance(),
        seed in any::<u64>(),
    ) {
        let clause_count = formula.clause_count();
        let mut ctx = Context::from_config_seeded(Config::default(), formula, seed).unwrap();
        ctx.valuation = valuation;

        for clause_index in 0..clause_count {
            let atom = ctx.choose_flip_atom(clause_index);
            prop_assert!(ctx.formula().clause(clause_index).atoms().any(|a| a == atom));
        }
    }

    /// Text generated from a formula reads back as the same formula.
    #[test]
    fn fixed_layout_round_trip(
        (formula, _) in arbitrary_instance(),
    ) {
        let mut text = String::new();
        for _ in 0..7 {
            text.push_str("c preamble\n");
        }
        text.push_str(&formula.as_dimacs());

        let reread = Formula::from_reader(text.as_bytes()).unwrap();
        prop_assert_eq!(formula, reread);
    }
}

use stoat_sat::{
    structures::{
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{ErrorKind, ParseError},
};

mod dimacs {
    use super::*;

    /// The layout the reader expects: seven preamble lines, a problem
    /// specification line, then the clause lines.
    fn fixed_layout(body: &str) -> String {
        let mut text = String::new();
        for _ in 0..7 {
            text.push_str("c preamble\n");
        }
        text.push_str(body);
        text
    }

    #[test]
    fn well_formed() {
        let text = fixed_layout("p cnf 4 3\n1 -2 3 0\n-1 2 0\n4 0\n");
        let formula = Formula::from_reader(text.as_bytes()).unwrap();

        assert_eq!(formula.atom_count(), 4);
        assert_eq!(formula.clause_count(), 3);

        let ints = formula
            .clauses()
            .iter()
            .map(|clause| clause.iter().map(|l| l.as_int()).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        assert_eq!(ints, vec![vec![1, -2, 3], vec![-1, 2], vec![4]]);
    }

    #[test]
    fn preamble_content_ignored() {
        let mut text = String::new();
        for line in 0..7 {
            text.push_str(&format!("anything at all, even {line} -2 0\n"));
        }
        text.push_str("p cnf 2 1\n1 2 0\n");

        assert!(Formula::from_reader(text.as_bytes()).is_ok());
    }

    #[test]
    fn round_trip() {
        let original = Formula::new(
            3,
            vec![
                vec![
                    CLiteral::new(1, true),
                    CLiteral::new(2, true),
                    CLiteral::new(3, false),
                ],
                vec![
                    CLiteral::new(1, false),
                    CLiteral::new(2, true),
                    CLiteral::new(3, true),
                ],
            ],
        );

        let text = fixed_layout(&original.as_dimacs());
        let reread = Formula::from_reader(text.as_bytes()).unwrap();

        assert_eq!(original, reread);
    }

    #[test]
    fn too_few_lines() {
        let text = "c\nc\np cnf 1 1\n1 0\n";
        assert_eq!(
            Formula::from_reader(text.as_bytes()),
            Err(ErrorKind::Parse(ParseError::MissingHeader))
        );
    }

    #[test]
    fn header_tokens_missing() {
        let text = fixed_layout("p cnf\n");
        assert_eq!(
            Formula::from_reader(text.as_bytes()),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn header_tokens_not_counts() {
        let text = fixed_layout("p cnf three 1\n1 0\n");
        assert_eq!(
            Formula::from_reader(text.as_bytes()),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn clause_shortfall() {
        let text = fixed_layout("p cnf 2 2\n1 2 0\n");
        assert_eq!(
            Formula::from_reader(text.as_bytes()),
            Err(ErrorKind::Parse(ParseError::ClauseCountMismatch {
                declared: 2,
                found: 1
            }))
        );
    }

    #[test]
    fn clause_surplus() {
        let text = fixed_layout("p cnf 2 1\n1 2 0\n-1 0\n");
        assert_eq!(
            Formula::from_reader(text.as_bytes()),
            Err(ErrorKind::Parse(ParseError::ClauseCountMismatch {
                declared: 1,
                found: 2
            }))
        );
    }

    #[test]
    fn trailing_blank_line_is_a_mismatch() {
        let text = fixed_layout("p cnf 2 1\n1 2 0\n\n");
        assert_eq!(
            Formula::from_reader(text.as_bytes()),
            Err(ErrorKind::Parse(ParseError::ClauseCountMismatch {
                declared: 1,
                found: 2
            }))
        );
    }

    #[test]
    fn clause_token_not_an_integer() {
        let text = fixed_layout("p cnf 2 1\n1 two 0\n");
        assert_eq!(
            Formula::from_reader(text.as_bytes()),
            Err(ErrorKind::Parse(ParseError::Line(9)))
        );
    }

    #[test]
    fn zero_literal() {
        let text = fixed_layout("p cnf 2 1\n1 0 2 0\n");
        assert_eq!(
            Formula::from_reader(text.as_bytes()),
            Err(ErrorKind::Parse(ParseError::Line(9)))
        );
    }

    #[test]
    fn terminator_only_clause() {
        let text = fixed_layout("p cnf 2 2\n1 2 0\n0\n");
        assert_eq!(
            Formula::from_reader(text.as_bytes()),
            Err(ErrorKind::Parse(ParseError::Line(10)))
        );
    }

    #[test]
    fn terminator_value_is_discarded_unchecked() {
        // The last token is dropped whatever it is --- the layout, not the
        // token, closes a clause.
        let text = fixed_layout("p cnf 2 1\n1 2 -7\n");
        let formula = Formula::from_reader(text.as_bytes()).unwrap();

        let ints = formula.clause(0).iter().map(|l| l.as_int()).collect::<Vec<_>>();
        assert_eq!(ints, vec![1, 2]);
    }
}

//! A reader for formulas in fixed-layout DIMACS.
//!
//! The layout is that of the SATLIB uniform random benchmark distributions:
//!
//! - Lines 1--7 (1-indexed) are preamble, and their content is ignored.
//! - Line 8 is the problem specification line.
//!   Of its whitespace-separated tokens, the third is read as the atom count
//!   and the fourth as the clause count (`p cnf ⟨atoms⟩ ⟨clauses⟩`).
//! - Every following line is a clause line: whitespace-separated integers
//!   whose last token is a terminator and is discarded, the rest being the
//!   literals of the clause in order.
//!
//! The count of clause lines must equal the declared clause count exactly
//! --- a shortfall, surplus, or trailing blank line is a
//! [ClauseCountMismatch](crate::types::err::ParseError::ClauseCountMismatch).
//!
//! No check is made that a literal's atom is within the declared atom count.
//! Feeding a formula with out-of-range atoms to a solve is the caller's
//! mistake to avoid (evaluation will panic on such an atom).
//! A literal with atom 0 and a clause with no literals at all are rejected,
//! as either would break an invariant the search relies on.

use std::io::BufRead;

use crate::{
    structures::{
        clause::CClause,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// The (1-indexed) count of preamble and problem specification lines.
const HEADER_LINES: usize = 8;

impl Formula {
    /// Reads a formula in fixed-layout DIMACS.
    ///
    /// ```rust
    /// # use stoat_sat::structures::formula::Formula;
    /// let mut text = String::new();
    /// for _ in 0..7 {
    ///     text.push_str("c preamble\n");
    /// }
    /// text.push_str("p cnf 3 2\n");
    /// text.push_str("1 -2 3 0\n");
    /// text.push_str("-1 2 0\n");
    ///
    /// let formula = Formula::from_reader(text.as_bytes()).unwrap();
    /// assert_eq!(formula.atom_count(), 3);
    /// assert_eq!(formula.clause_count(), 2);
    /// ```
    pub fn from_reader(reader: impl BufRead) -> Result<Formula, ErrorKind> {
        let mut lines = Vec::default();

        for (index, line) in reader.lines().enumerate() {
            match line {
                Ok(line) => lines.push(line),
                Err(_) => return Err(err::ParseError::Line(index + 1).into()),
            }
        }

        if lines.len() < HEADER_LINES {
            return Err(err::ParseError::MissingHeader.into());
        }

        let mut problem_details = lines[HEADER_LINES - 1].split_whitespace();

        let atom_count: usize = match problem_details.nth(2) {
            None => return Err(err::ParseError::ProblemSpecification.into()),
            Some(token) => match token.parse() {
                Err(_) => return Err(err::ParseError::ProblemSpecification.into()),
                Ok(count) => count,
            },
        };

        let clause_count: usize = match problem_details.next() {
            None => return Err(err::ParseError::ProblemSpecification.into()),
            Some(token) => match token.parse() {
                Err(_) => return Err(err::ParseError::ProblemSpecification.into()),
                Ok(count) => count,
            },
        };

        let found = lines.len() - HEADER_LINES;
        if found != clause_count {
            return Err(err::ParseError::ClauseCountMismatch {
                declared: clause_count,
                found,
            }
            .into());
        }

        let mut clauses = Vec::with_capacity(clause_count);

        for (offset, line) in lines[HEADER_LINES..].iter().enumerate() {
            let line_number = HEADER_LINES + offset + 1;
            clauses.push(clause_from_line(line, line_number)?);
        }

        Ok(Formula::new(atom_count, clauses))
    }
}

/// Reads a clause line: the last token is discarded as a terminator, the
/// rest are the literals of the clause.
fn clause_from_line(line: &str, line_number: usize) -> Result<CClause, ErrorKind> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();

    let Some((_terminator, literal_tokens)) = tokens.split_last() else {
        return Err(err::ParseError::Line(line_number).into());
    };

    if literal_tokens.is_empty() {
        return Err(err::ParseError::Line(line_number).into());
    }

    let mut clause = CClause::with_capacity(literal_tokens.len());

    for token in literal_tokens {
        let int = match token.parse::<i32>() {
            Ok(0) | Err(_) => return Err(err::ParseError::Line(line_number).into()),
            Ok(int) => int,
        };

        clause.push(CLiteral::new(int.unsigned_abs(), int.is_positive()));
    }

    Ok(clause)
}

//! Error types used in the library.
//!
//! - Parse errors are external: malformed input is propagated to the caller,
//!   which must abort the run --- no partial formula is ever returned.
//! - Config errors are caught before any search state is touched.
//! - Exhausting the flip/turn budget is *not* an error: an incomplete solver
//!   has no way to prove unsatisfiability, and so running out of budget is a
//!   normal terminal outcome, reported as
//!   [Report::Unknown](crate::reports::Report::Unknown).
//
//  Names of the error enums overlap with corresponding structs, and so
//  throughout the library err::{self} is used to prefix the types with
//  `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Parse(ParseError),
}

/// Errors from checking a configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value of the named option is outside the bounds of the option.
    ///
    /// In particular: a zero turn or flip budget, or a non-positive epsilon
    /// (which would risk a zero denominator when scoring).
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input ended before the header line --- fewer than eight lines in
    /// total.
    MissingHeader,

    /// The problem specification tokens of the header line are absent, or
    /// not parseable as counts.
    ProblemSpecification,

    /// Some problem with a clause at a specific (1-indexed) line: a token
    /// not parseable as an integer, a zero literal, or no literal at all.
    Line(usize),

    /// The number of clause lines following the header does not match the
    /// declared clause count.
    ClauseCountMismatch {
        /// The count declared by the header line.
        declared: usize,

        /// The count of clause lines actually present.
        found: usize,
    },
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

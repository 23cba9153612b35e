//! A `nom`-based scanner for dotted path expressions.
//!
//! The grammar is deliberately forgiving: a step is a field name that sits at
//! the start of the expression or directly after `.` (child) or `..`
//! (descendant). Anything else is skipped one character at a time, so the
//! scanner extracts whatever valid steps it can find and never fails.
use super::ast::{Query, QueryStep};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{anychar, char},
    combinator::{map, opt, value},
    multi::many0,
    sequence::preceded,
};

// --- Main Public Parser ---

/// Scans a single path expression into its ordered steps.
pub fn parse_path(input: &str) -> Vec<QueryStep> {
    match path(input) {
        Ok((_, steps)) => steps,
        Err(e) => {
            log::warn!("Could not scan path expression '{}': {}", input, e);
            Vec::new()
        }
    }
}

impl Query {
    /// Parses one path expression.
    pub fn parse(expression: &str) -> Self {
        let query = Query::new(parse_path(expression));
        log::debug!("Parsed '{}' into {} step(s)", expression, query.len());
        query
    }

    /// Parses every expression independently and concatenates the steps in
    /// argument order, so `["store", "book"]` equals `"store.book"`.
    pub fn parse_all<I, S>(expressions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut query = Query::default();
        for expression in expressions {
            query.extend(Query::parse(expression.as_ref()));
        }
        query
    }
}

impl std::str::FromStr for Query {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Query::parse(s))
    }
}

// --- Combinators ---

fn field_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_').parse(input)
}

fn leading_step(input: &str) -> IResult<&str, QueryStep> {
    map(field_name, |field| QueryStep::Child(field.to_string())).parse(input)
}

fn child_step(input: &str) -> IResult<&str, QueryStep> {
    map(preceded(char('.'), field_name), |field| {
        QueryStep::Child(field.to_string())
    })
    .parse(input)
}

fn descendant_step(input: &str) -> IResult<&str, QueryStep> {
    map(preceded(tag(".."), field_name), |field| {
        QueryStep::Descendant(field.to_string())
    })
    .parse(input)
}

/// A step introduced by a delimiter. `.` is tried first; on `..name` it fails
/// at the second dot and the descendant form takes over.
fn delimited_step(input: &str) -> IResult<&str, QueryStep> {
    alt((child_step, descendant_step)).parse(input)
}

fn path(input: &str) -> IResult<&str, Vec<QueryStep>> {
    let (input, first) = opt(leading_step).parse(input)?;
    let (input, rest) =
        many0(alt((map(delimited_step, Some), value(None, anychar)))).parse(input)?;

    let steps = first.into_iter().chain(rest.into_iter().flatten()).collect();
    Ok((input, steps))
}

//! Token parser for shape record files
//!
//! Records are token based: `<tag> <dim1> [<dim2>]`, separated by any
//! ASCII whitespace (space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`). Line breaks
//! carry no meaning.

use nom::{
    bytes::complete::{take_till1, take_while},
    combinator::{all_consuming, opt},
    number::complete::double,
    IResult, Parser,
};
use tracing::trace;

use crate::ast::*;

/// Parse error. Any of these ends the scan.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Parse error at record {record}: Unknown shape type: {tag}")]
    UnknownShape { record: usize, tag: String },
    #[error("Parse error at record {record}: Invalid dimension for {shape}: {token}")]
    InvalidDimension {
        record: usize,
        shape: &'static str,
        token: String,
    },
    #[error("Parse error at record {record}: Missing dimension for {shape}")]
    MissingDimension { record: usize, shape: &'static str },
}

impl ParseError {
    /// Record counter value at which the error occurred
    pub fn record(&self) -> usize {
        match self {
            ParseError::UnknownShape { record, .. }
            | ParseError::InvalidDimension { record, .. }
            | ParseError::MissingDimension { record, .. } => *record,
        }
    }
}

/// Parse every record in `input`, stopping at the first error
pub fn parse(input: &str) -> Result<Vec<Record>, ParseError> {
    Scanner::new(input).collect()
}

/// Lazy record reader. Tokens are consumed only as records are requested,
/// so input after an error is never looked at.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    rest: &'a str,
    records: usize,
    halted: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            records: 0,
            halted: false,
        }
    }

    /// Number of records dispatched so far
    pub fn records(&self) -> usize {
        self.records
    }

    /// Input not yet consumed
    pub fn remaining(&self) -> &'a str {
        self.rest
    }

    /// Read the next record.
    ///
    /// Returns `Ok(None)` at end of input, and forever after an error.
    pub fn next_record(&mut self) -> Result<Option<Record>, ParseError> {
        if self.halted {
            return Ok(None);
        }
        let Some(tag) = self.next_token() else {
            return Ok(None);
        };
        self.records += 1;
        let record = self.records;
        trace!(record, tag, "dispatching record");

        let Some(kind) = ShapeKind::from_tag(tag) else {
            self.halted = true;
            return Err(ParseError::UnknownShape {
                record,
                tag: tag.to_string(),
            });
        };

        let shape = match kind {
            ShapeKind::Square => Shape::Square {
                side: self.dimension(kind, record)?,
            },
            ShapeKind::Rectangle => {
                let length = self.dimension(kind, record)?;
                let width = self.dimension(kind, record)?;
                Shape::Rectangle { length, width }
            }
            ShapeKind::Circle => Shape::Circle {
                radius: self.dimension(kind, record)?,
            },
        };
        Ok(Some(Record {
            index: record,
            shape,
        }))
    }

    fn dimension(&mut self, kind: ShapeKind, record: usize) -> Result<f64, ParseError> {
        let Some(tok) = self.next_token() else {
            self.halted = true;
            return Err(ParseError::MissingDimension {
                record,
                shape: kind.tag(),
            });
        };
        match parse_number(tok) {
            Ok((_, value)) => Ok(value),
            Err(_) => {
                self.halted = true;
                Err(ParseError::InvalidDimension {
                    record,
                    shape: kind.tag(),
                    token: tok.to_string(),
                })
            }
        }
    }

    /// Next token, or `None` once only separators are left
    fn next_token(&mut self) -> Option<&'a str> {
        match parse_token(self.rest) {
            Ok((rest, tok)) => {
                self.rest = rest;
                tok
            }
            // take_while and opt cannot fail on complete input
            Err(_) => {
                self.rest = "";
                None
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Token separator: the C `isspace` set
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Skip separators and take one token, if any is left
fn parse_token(input: &str) -> IResult<&str, Option<&str>> {
    let (input, _) = take_while(is_separator).parse(input)?;
    opt(take_till1(is_separator)).parse(input)
}

/// A whole token as a decimal number
fn parse_number(input: &str) -> IResult<&str, f64> {
    all_consuming(double).parse(input)
}

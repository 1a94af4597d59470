//! Reader for plain-text system files.
//!
//! ```text
//! # comment
//! dense
//!   [1, 2]  3 ± 0.1 | 4
//!   0       2       | [1, 1.5]
//! ```
//!
//! or `tridiagonal` followed by one `a b c | d` line per equation. Line
//! breaks carry no meaning: a row ends with the entry after `|`.

use std::io::Read;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{cut, eof, map, value, verify},
    error::{context, convert_error},
    multi::many1,
    number::complete::double,
    sequence::{delimited, pair, preceded, separated_pair, terminated},
    Finish,
};
use thiserror::Error;

use crate::{
    interval::Interval,
    matrix::{IntervalMatrix, IntervalVector},
    solvers::tridiagonal::TridiagonalSystem,
};

type IResult<I, O> = Result<(I, O), nom::Err<nom::error::VerboseError<I>>>;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("parse error:\n{0}")]
    Syntax(String),
    #[error("row {row} has {got} coefficients, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error(transparent)]
    Shape(#[from] crate::error::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub enum System {
    Dense {
        a: IntervalMatrix,
        b: IntervalVector,
    },
    Tridiagonal(TridiagonalSystem),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Dense,
    Tridiagonal,
}

/// Coefficients left of `|` and the right-hand side.
type Row = (Vec<Interval>, Interval);

fn ws(mut input: &str) -> IResult<&str, ()> {
    loop {
        input = input.trim_start();
        if input.starts_with('#') {
            input = input.trim_start_matches(|c| c != '\n' && c != '\r');
        } else {
            break Ok((input, ()));
        }
    }
}

fn number(input: &str) -> IResult<&str, f64> {
    delimited(
        ws,
        context("finite number", verify(double, |x: &f64| x.is_finite())),
        ws,
    )(input)
}

fn bracketed(input: &str) -> IResult<&str, Interval> {
    context(
        "interval",
        map(
            verify(
                delimited(
                    char('['),
                    cut(separated_pair(number, char(','), number)),
                    cut(char(']')),
                ),
                |&(lo, hi): &(f64, f64)| lo <= hi,
            ),
            |(lo, hi)| Interval::new(lo, hi),
        ),
    )(input)
}

fn mid_rad(input: &str) -> IResult<&str, Interval> {
    map(
        separated_pair(
            number,
            alt((tag("±"), tag("+-"))),
            cut(context(
                "radius",
                verify(number, |r: &f64| *r >= 0.0),
            )),
        ),
        |(mid, rad)| Interval::from_mid_rad(mid, rad),
    )(input)
}

fn entry(input: &str) -> IResult<&str, Interval> {
    delimited(
        ws,
        alt((bracketed, mid_rad, map(number, Interval::point))),
        ws,
    )(input)
}

fn row(input: &str) -> IResult<&str, Row> {
    context(
        "row",
        pair(many1(entry), preceded(char('|'), cut(entry))),
    )(input)
}

fn kind(input: &str) -> IResult<&str, Kind> {
    delimited(
        ws,
        context(
            "system kind",
            alt((
                value(Kind::Dense, tag("dense")),
                value(Kind::Tridiagonal, tag("tridiagonal")),
            )),
        ),
        ws,
    )(input)
}

fn system(input: &str) -> IResult<&str, (Kind, Vec<Row>)> {
    terminated(pair(kind, cut(many1(row))), preceded(ws, eof))(input)
}

fn check_lengths(rows: &[Row], expected: usize) -> Result<(), ParseError> {
    for (i, (coefficients, _)) in rows.iter().enumerate() {
        if coefficients.len() != expected {
            return Err(ParseError::RowLength {
                row: i + 1,
                expected,
                got: coefficients.len(),
            });
        }
    }
    Ok(())
}

fn build(kind: Kind, rows: Vec<Row>) -> Result<System, ParseError> {
    match kind {
        Kind::Dense => {
            let n = rows.len();
            check_lengths(&rows, n)?;
            let mut a = IntervalMatrix::from_elem((n, n), Interval::point(0.0));
            let mut b = IntervalVector::from_elem(n, Interval::point(0.0));
            for (i, (coefficients, rhs)) in rows.into_iter().enumerate() {
                for (j, value) in coefficients.into_iter().enumerate() {
                    a[[i, j]] = value;
                }
                b[i] = rhs;
            }
            Ok(System::Dense { a, b })
        }
        Kind::Tridiagonal => {
            check_lengths(&rows, 3)?;
            let m = rows.len();
            let (mut a, mut b, mut c, mut d) = (
                Vec::with_capacity(m),
                Vec::with_capacity(m),
                Vec::with_capacity(m),
                Vec::with_capacity(m),
            );
            for (coefficients, rhs) in rows {
                a.push(coefficients[0]);
                b.push(coefficients[1]);
                c.push(coefficients[2]);
                d.push(rhs);
            }
            Ok(System::Tridiagonal(TridiagonalSystem::new(a, b, c, d)?))
        }
    }
}

pub fn parse_system(input: &str) -> Result<System, ParseError> {
    match system(input).finish() {
        Ok((_, (kind, rows))) => build(kind, rows),
        Err(e) => Err(ParseError::Syntax(convert_error(input, e))),
    }
}

pub fn parse_file(path: &std::path::Path) -> Result<System, ParseError> {
    let mut file = std::fs::File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    parse_system(&contents)
}

/// Parsing as a static trait member
///
/// `FromStr` plays the role of a compile-time-enforced constructor: any
/// `T: FromStr` can be produced by the generic `parse_all` without the
/// caller naming a concrete type. Implemented here for `Waterfowl`
/// (comma-separated `name,quack,honk,fly,cuteness`) and `Cuteness`.

use crate::domain::numeric::Cuteness;
use crate::domain::waterfowl::Waterfowl;
use std::str::FromStr;

/// Errors from parsing domain values out of text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 5 comma-separated fields, got {0}")]
    FieldCount(usize),

    #[error("invalid flag `{value}` for {field}, expected true or false")]
    InvalidFlag { field: &'static str, value: String },

    #[error("invalid number `{0}`")]
    InvalidNumber(String),
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool, ParseError> {
    value.trim().parse().map_err(|_| ParseError::InvalidFlag {
        field,
        value: value.trim().to_string(),
    })
}

impl FromStr for Waterfowl {
    type Err = ParseError;

    /// Parses `name,quack,honk,fly,cuteness`, e.g. `Duck,true,false,true,1`
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = input.split(',').collect();
        if fields.len() != 5 {
            return Err(ParseError::FieldCount(fields.len()));
        }

        let cuteness = fields[4]
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidNumber(fields[4].trim().to_string()))?;

        Ok(Self {
            name: fields[0].trim().to_string(),
            can_quack: parse_flag("quack", fields[1])?,
            can_honk: parse_flag("honk", fields[2])?,
            can_fly: parse_flag("fly", fields[3])?,
            cuteness,
        })
    }
}

impl FromStr for Cuteness {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        input
            .trim()
            .parse()
            .map(Cuteness)
            .map_err(|_| ParseError::InvalidNumber(input.trim().to_string()))
    }
}

/// Parses a whole batch, stopping at the first failure
pub fn parse_all<T: FromStr>(inputs: &[&str]) -> Result<Vec<T>, T::Err> {
    inputs.iter().map(|input| input.parse()).collect()
}

//! Shell-boundary input parsing and validation.
//!
//! Shells hand raw text from a form field or command line to [`parse_inputs`]
//! and only call into the core once it returns [`Inputs`]. The `Display` of
//! every [`InputError`] is the message shown to the user.

use std::fmt;
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_NUMBER, MIN_NUMBER, WEB_MAX_GROUP_SIZE};

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Which input a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Number,
    GroupSize,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => f.write_str("number"),
            Self::GroupSize => f.write_str("group size"),
        }
    }
}

/// Range errors carry the value as entered, so integers too large for `i64`
/// are still reported by value rather than as non-integers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please enter whole numbers: the {field} '{value}' is not an integer.")]
    NotAnInteger { field: Field, value: String },
    #[error("Please enter a number between {min} and {max} (got {value}).", min = MIN_NUMBER, max = MAX_NUMBER)]
    OutOfRange { value: String },
    #[error("The group size must be a positive number (got {value}).")]
    NonPositiveGroup { value: String },
    #[error("The group size can be at most {max} (got {value}).")]
    GroupTooLarge { value: String, max: i64 },
}

impl InputError {
    /// The input the error refers to.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::NotAnInteger { field, .. } => *field,
            Self::OutOfRange { .. } => Field::Number,
            Self::NonPositiveGroup { .. } | Self::GroupTooLarge { .. } => Field::GroupSize,
        }
    }
}

/// Per-shell limits on top of the shared number range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputPolicy {
    /// Upper bound on the group size, if the shell imposes one.
    pub max_group_size: Option<i64>,
}

impl InputPolicy {
    /// Group size is only required to be positive.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { max_group_size: None }
    }

    /// The web page caps the group size like its numeric input does.
    #[must_use]
    pub fn web() -> Self {
        Self { max_group_size: Some(WEB_MAX_GROUP_SIZE) }
    }

    /// Effective group size cap; never above what a `u32` holds.
    fn group_limit(self) -> i64 {
        let ceiling = i64::from(u32::MAX);
        self.max_group_size.map_or(ceiling, |max| max.min(ceiling))
    }
}

/// Validated `(number, group_size)` pair, safe to pass to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inputs {
    pub number: u32,
    pub group_size: u32,
}

impl Inputs {
    /// Validate already-parsed integers.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, number before group size.
    pub fn new(number: i64, group_size: i64, policy: InputPolicy) -> Result<Self, InputError> {
        Ok(Self { number: check_number(Integer::Fits(number))?, group_size: check_group(Integer::Fits(group_size), policy)? })
    }
}

/// Parse and validate raw text for both inputs.
///
/// Both fields are parsed before either is range-checked, so a non-integer
/// group size is reported even when the number is also out of range.
///
/// # Errors
///
/// Returns [`InputError::NotAnInteger`] for unparsable text, otherwise the
/// range errors of [`Inputs::new`].
pub fn parse_inputs(number: &str, group_size: &str, policy: InputPolicy) -> Result<Inputs, InputError> {
    let number = parse_integer(Field::Number, number)?;
    let group_size = parse_integer(Field::GroupSize, group_size)?;
    Ok(Inputs { number: check_number(number)?, group_size: check_group(group_size, policy)? })
}

/// An entered integer: either it fits in `i64`, or it is digits whose
/// magnitude does not.
#[derive(Debug, Clone, Copy)]
enum Integer<'a> {
    Fits(i64),
    Overflows { text: &'a str, negative: bool },
}

fn parse_integer(field: Field, raw: &str) -> Result<Integer<'_>, InputError> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => Ok(Integer::Fits(value)),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(Integer::Overflows { text: trimmed, negative: false }),
            IntErrorKind::NegOverflow => Ok(Integer::Overflows { text: trimmed, negative: true }),
            _ => Err(InputError::NotAnInteger { field, value: trimmed.to_owned() }),
        },
    }
}

fn check_number(number: Integer<'_>) -> Result<u32, InputError> {
    match number {
        Integer::Fits(value) if (MIN_NUMBER..=MAX_NUMBER).contains(&value) => {
            u32::try_from(value).map_err(|_| InputError::OutOfRange { value: value.to_string() })
        }
        Integer::Fits(value) => Err(InputError::OutOfRange { value: value.to_string() }),
        Integer::Overflows { text, .. } => Err(InputError::OutOfRange { value: text.to_owned() }),
    }
}

fn check_group(group_size: Integer<'_>, policy: InputPolicy) -> Result<u32, InputError> {
    let max = policy.group_limit();
    match group_size {
        Integer::Fits(value) if value <= 0 => Err(InputError::NonPositiveGroup { value: value.to_string() }),
        Integer::Fits(value) if value > max => Err(InputError::GroupTooLarge { value: value.to_string(), max }),
        Integer::Fits(value) => {
            u32::try_from(value).map_err(|_| InputError::GroupTooLarge { value: value.to_string(), max })
        }
        Integer::Overflows { text, negative: true } => Err(InputError::NonPositiveGroup { value: text.to_owned() }),
        Integer::Overflows { text, negative: false } => {
            Err(InputError::GroupTooLarge { value: text.to_owned(), max })
        }
    }
}

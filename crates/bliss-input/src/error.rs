//! Input contract errors

use std::fmt;
use thiserror::Error;

/// Which part of an input event violated its range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Player,
    Button,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Player => f.write_str("player index"),
            InputField::Button => f.write_str("button code"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A player index or button code outside the statically known set.
    /// Never clamped: a host sending these has a bug worth seeing.
    #[error("{field} {value} out of range (expected 0..{limit})")]
    OutOfRangeInput {
        field: InputField,
        value: i64,
        limit: usize,
    },
}

impl InputError {
    pub fn player(value: i64, limit: usize) -> Self {
        InputError::OutOfRangeInput {
            field: InputField::Player,
            value,
            limit,
        }
    }

    pub fn button(value: i64, limit: usize) -> Self {
        InputError::OutOfRangeInput {
            field: InputField::Button,
            value,
            limit,
        }
    }
}

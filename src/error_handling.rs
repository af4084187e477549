use thiserror::Error;

/// Broad category of a [`CalcError`], used by front ends to pick a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    lexical,
    syntax,
    math_domain,
    unknown_identifier,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("unexpected character, '{character}', at position {offset}")]
    unexpected_character { character: char, offset: usize },

    #[error("'{literal}' at position {offset} is not a valid number")]
    invalid_number { literal: String, offset: usize },

    #[error("empty expression")]
    empty_expression,

    #[error("expected {expected}, found {found}")]
    unexpected_token { expected: String, found: String },

    #[error("expected ')' to close the group, found {0}")]
    unclosed_paren(String),

    #[error("did not expect {0} after the expression")]
    did_not_expect(String),

    #[error("{0}")]
    domain(String),

    #[error("identifier, '{0}', is not defined")]
    undefined(String),
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        use CalcError::*;
        match self {
            unexpected_character { .. } | invalid_number { .. } => ErrorKind::lexical,
            empty_expression | unexpected_token { .. } | unclosed_paren(_) | did_not_expect(_) => {
                ErrorKind::syntax
            }
            domain(_) => ErrorKind::math_domain,
            undefined(_) => ErrorKind::unknown_identifier,
        }
    }

    pub(crate) fn domain_of(message: impl Into<String>) -> Self {
        CalcError::domain(message.into())
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

use crate::value::ValueKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("Unexpected end of document, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("Unexpected character {found:?} at offset {offset}, expected {expected}")]
    UnexpectedChar {
        found: char,
        offset: usize,
        expected: &'static str,
    },

    #[error("Integer literal at offset {offset} does not fit in 32 bits")]
    IntegerOverflow { offset: usize },

    #[error("Nesting deeper than {max} levels at offset {offset}", max = crate::parser::MAX_DEPTH)]
    NestingTooDeep { offset: usize },

    #[error("Trailing characters after document at offset {offset}")]
    TrailingCharacters { offset: usize },

    #[error("Expected {expected}, found {found}")]
    TypeMismatch { expected: ValueKind, found: ValueKind },
}

pub type Result<T> = std::result::Result<T, DocumentError>;

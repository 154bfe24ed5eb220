use std::fmt;

use intset::ValueError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct CommandError {
    pub kind: CommandErrorKind,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandErrorKind {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("missing {0}")]
    MissingArgument(ExpectedItem),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("invalid set name `{0}`")]
    InvalidName(String),
    #[error("undefined set `{0}`")]
    UndefinedSet(String),
    #[error(transparent)]
    Value(#[from] ValueError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedItem {
    Name,
    Value,
}

impl fmt::Display for ExpectedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedItem::Name => f.write_str("set name"),
            ExpectedItem::Value => f.write_str("value"),
        }
    }
}

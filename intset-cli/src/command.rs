use std::str::SplitWhitespace;

use crate::error::{CommandErrorKind, ExpectedItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'src> {
    Add { name: &'src str, values: Vec<i64> },
    Remove { name: &'src str, values: Vec<i64> },
    Has { name: &'src str, value: i64 },
    Union { dst: &'src str, src: &'src str },
    Copy { dst: &'src str, src: &'src str },
    Clear { name: &'src str },
    Len { name: &'src str },
    Print { name: &'src str },
    Dump { name: &'src str },
}

/// Parses one script line. Blank lines and comments yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command<'_>>, CommandErrorKind> {
    let code = match line.split_once('#') {
        Some((code, _comment)) => code,
        None => line,
    };

    let mut args = Args {
        inner: code.split_whitespace(),
    };
    let Some(keyword) = args.inner.next() else {
        return Ok(None);
    };

    let command = match keyword {
        "add" => Command::Add {
            name: args.name()?,
            values: args.values()?,
        },
        "remove" => Command::Remove {
            name: args.name()?,
            values: args.values()?,
        },
        "has" => Command::Has {
            name: args.name()?,
            value: args.value()?,
        },
        "union" => Command::Union {
            dst: args.name()?,
            src: args.name()?,
        },
        "copy" => Command::Copy {
            dst: args.name()?,
            src: args.name()?,
        },
        "clear" => Command::Clear { name: args.name()? },
        "len" => Command::Len { name: args.name()? },
        "print" => Command::Print { name: args.name()? },
        "dump" => Command::Dump { name: args.name()? },
        other => return Err(CommandErrorKind::UnknownCommand(other.to_string())),
    };

    args.finish()?;
    Ok(Some(command))
}

struct Args<'src> {
    inner: SplitWhitespace<'src>,
}

impl<'src> Args<'src> {
    fn name(&mut self) -> Result<&'src str, CommandErrorKind> {
        let name = self
            .inner
            .next()
            .ok_or(CommandErrorKind::MissingArgument(ExpectedItem::Name))?;

        if is_ident(name) {
            Ok(name)
        } else {
            Err(CommandErrorKind::InvalidName(name.to_string()))
        }
    }

    fn value(&mut self) -> Result<i64, CommandErrorKind> {
        let raw = self
            .inner
            .next()
            .ok_or(CommandErrorKind::MissingArgument(ExpectedItem::Value))?;
        parse_value(raw)
    }

    fn values(&mut self) -> Result<Vec<i64>, CommandErrorKind> {
        self.inner.by_ref().map(parse_value).collect()
    }

    fn finish(mut self) -> Result<(), CommandErrorKind> {
        match self.inner.next() {
            Some(extra) => Err(CommandErrorKind::UnexpectedArgument(extra.to_string())),
            None => Ok(()),
        }
    }
}

fn parse_value(raw: &str) -> Result<i64, CommandErrorKind> {
    raw.parse()
        .map_err(|_| CommandErrorKind::InvalidNumber(raw.to_string()))
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_comment_lines() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \t"), Ok(None));
        assert_eq!(parse_line("# only a comment"), Ok(None));
    }

    #[test]
    fn add_with_values_and_trailing_comment() {
        assert_eq!(
            parse_line("add a 1 2 -3 # note"),
            Ok(Some(Command::Add {
                name: "a",
                values: vec![1, 2, -3],
            }))
        );
    }

    #[test]
    fn add_without_values() {
        assert_eq!(
            parse_line("add empty"),
            Ok(Some(Command::Add {
                name: "empty",
                values: vec![],
            }))
        );
    }

    #[test]
    fn two_name_commands() {
        assert_eq!(
            parse_line("union a b"),
            Ok(Some(Command::Union { dst: "a", src: "b" }))
        );
        assert_eq!(
            parse_line("copy snap a"),
            Ok(Some(Command::Copy {
                dst: "snap",
                src: "a",
            }))
        );
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            parse_line("intersect a b"),
            Err(CommandErrorKind::UnknownCommand("intersect".to_string()))
        );
    }

    #[test]
    fn missing_arguments() {
        assert_eq!(
            parse_line("has a"),
            Err(CommandErrorKind::MissingArgument(ExpectedItem::Value))
        );
        assert_eq!(
            parse_line("union a"),
            Err(CommandErrorKind::MissingArgument(ExpectedItem::Name))
        );
    }

    #[test]
    fn extra_argument() {
        assert_eq!(
            parse_line("len a b"),
            Err(CommandErrorKind::UnexpectedArgument("b".to_string()))
        );
    }

    #[test]
    fn bad_tokens() {
        assert_eq!(
            parse_line("add a 1 x"),
            Err(CommandErrorKind::InvalidNumber("x".to_string()))
        );
        assert_eq!(
            parse_line("print 9lives"),
            Err(CommandErrorKind::InvalidName("9lives".to_string()))
        );
    }
}

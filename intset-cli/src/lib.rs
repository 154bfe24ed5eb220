pub mod command;
pub mod env;
pub mod error;

use std::{
    io::{self, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    command::{Command, parse_line},
    env::Environment,
    error::{CommandError, CommandErrorKind},
};

pub struct Runner {
    env: Environment,
    line: usize,
}

impl Runner {
    pub fn new() -> Self {
        Self {
            env: Environment::default(),
            line: 0,
        }
    }

    /// Runs every line of `source`. Command errors go to `err` and do not
    /// stop the remaining lines.
    pub fn run(
        &mut self,
        source: &str,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<()> {
        for text in source.lines() {
            self.line += 1;

            match self.run_line(text) {
                Ok(Some(output)) => writeln!(out, "{output}")?,
                Ok(None) => {}
                Err(error) => {
                    debug!(%error, "command failed");
                    writeln!(err, "{error}")?;
                }
            }
        }

        Ok(())
    }

    fn run_line(&mut self, text: &str) -> Result<Option<String>, CommandError> {
        let line = self.line;
        let at_line = |kind| CommandError { kind, line };

        let Some(command) = parse_line(text).map_err(at_line)? else {
            return Ok(None);
        };
        debug!(line, ?command, "executing");

        self.execute(command).map_err(at_line)
    }

    fn execute(&mut self, command: Command<'_>) -> Result<Option<String>, CommandErrorKind> {
        let output = match command {
            Command::Add { name, values } => {
                self.env.get_or_create(name).try_insert_all(values)?;
                None
            }
            Command::Remove { name, values } => {
                let set = self.env.get_or_create(name);
                for value in values {
                    set.try_remove(value)?;
                }
                None
            }
            Command::Has { name, value } => {
                Some(self.env.get(name)?.try_contains(value)?.to_string())
            }
            Command::Union { dst, src } => {
                let src = self.env.get(src)?.clone();
                self.env.get_or_create(dst).union_with(&src);
                None
            }
            Command::Copy { dst, src } => {
                let copy = self.env.get(src)?.clone();
                self.env.define(dst, copy);
                None
            }
            Command::Clear { name } => {
                self.env.get_or_create(name).clear();
                None
            }
            Command::Len { name } => Some(self.env.get(name)?.len().to_string()),
            Command::Print { name } => Some(self.env.get(name)?.to_string()),
            Command::Dump { name } => {
                let set = self.env.get(name)?;
                (!set.words().is_empty()).then(|| set.dump().to_string())
            }
        };

        Ok(output)
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_source(source: &str, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    Runner::new().run(source, out, err)
}

pub fn run_file(path: &Path) -> io::Result<()> {
    let source = std::fs::read_to_string(path)?;

    run_source(&source, &mut io::stdout().lock(), &mut io::stderr().lock())
}

pub fn run_repl() -> io::Result<()> {
    let mut runner = Runner::new();

    loop {
        let mut line = String::new();
        print!("> ");
        io::stdout().flush()?;

        let read_result = io::stdin().read_line(&mut line);

        match read_result {
            Ok(0) => break,
            Ok(..) => {}
            Err(e) => return Err(e),
        }

        runner.run(&line, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    }

    println!();

    Ok(())
}

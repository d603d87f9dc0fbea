//! Interpreter command lines.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use super::error::{Result, SessionError};
use crate::config::Config;

/// A program and its arguments, ready to spawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<OsString>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Check that a document has a path to hand to the interpreter.
pub(crate) fn require_path(path: Option<&Path>) -> Result<&Path> {
    match path {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Err(SessionError::NoFileAssociated),
    }
}

/// `interpreter + repl_args + path`
pub fn repl_command(config: &Config, path: Option<&Path>) -> Result<CommandLine> {
    let path = require_path(path)?;
    Ok(CommandLine::new(&config.interpreter)
        .args(&config.repl_args)
        .arg(path))
}

/// `interpreter + compile_args + [--backend=<name>] + path`
pub fn compile_command(
    config: &Config,
    path: Option<&Path>,
    backend: Option<&str>,
) -> Result<CommandLine> {
    let path = require_path(path)?;
    let mut command = CommandLine::new(&config.interpreter).args(&config.compile_args);
    if let Some(backend) = backend {
        command = command.arg(format!("--backend={backend}"));
    }
    Ok(command.arg(path))
}

/// `interpreter + backend_query_args`
pub fn backend_query_command(config: &Config) -> CommandLine {
    CommandLine::new(&config.interpreter).args(&config.backend_query_args)
}

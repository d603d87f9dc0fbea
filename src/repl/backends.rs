//! Compiler backend listing, cached for the lifetime of the cache value.
//!
//! The list comes from one interpreter invocation. It is only refreshed by
//! [`BackendCache::init`] and only dropped by [`BackendCache::invalidate`];
//! callers accept that it can go stale if the interpreter is upgraded while
//! the editor runs.

use std::io;
use std::process::Stdio;

use smol_str::SmolStr;
use tracing::debug;

use super::command::{CommandLine, backend_query_command};
use super::error::{Result, SessionError};
use crate::config::Config;

/// Runs the backend query and returns its raw output.
pub trait BackendQuery {
    fn run(&self, command: &CommandLine) -> io::Result<String>;
}

impl<F> BackendQuery for F
where
    F: Fn(&CommandLine) -> io::Result<String>,
{
    fn run(&self, command: &CommandLine) -> io::Result<String> {
        self(command)
    }
}

/// Runs the query as a real process and captures its standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBackendQuery;

impl BackendQuery for SystemBackendQuery {
    fn run(&self, command: &CommandLine) -> io::Result<String> {
        let output = command
            .to_command()
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;
        if !output.status.success() {
            return Err(io::Error::other(format!(
                "`{command}` exited with {}",
                output.status
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Memoized list of compiler backends.
#[derive(Debug, Default, Clone)]
pub struct BackendCache {
    backends: Option<Vec<SmolStr>>,
}

impl BackendCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query the interpreter and replace the cached list.
    pub fn init(&mut self, query: &impl BackendQuery, config: &Config) -> Result<&[SmolStr]> {
        let command = backend_query_command(config);
        let output = query
            .run(&command)
            .map_err(|e| SessionError::backend_query(&config.interpreter, e))?;
        let backends = parse_backends(&output);
        debug!(count = backends.len(), "refreshed backend list");
        let backends: &[SmolStr] = self.backends.insert(backends);
        Ok(backends)
    }

    /// The cached list, querying the interpreter only on first use.
    pub fn backends(&mut self, query: &impl BackendQuery, config: &Config) -> Result<&[SmolStr]> {
        if self.backends.is_none() {
            return self.init(query, config);
        }
        Ok(self.backends.as_deref().unwrap_or_default())
    }

    /// The cached list without querying.
    pub fn cached(&self) -> Option<&[SmolStr]> {
        self.backends.as_deref()
    }

    pub fn is_initialized(&self) -> bool {
        self.backends.is_some()
    }

    /// Drop the cached list; the next [`backends`](Self::backends) call queries again.
    pub fn invalidate(&mut self) {
        if self.backends.take().is_some() {
            debug!("invalidated backend list");
        }
    }

    /// `Some(true/false)` when initialized, `None` when nothing is cached yet.
    pub fn contains(&self, backend: &str) -> Option<bool> {
        self.cached().map(|list| list.iter().any(|b| b == backend))
    }
}

/// Split interpreter output into backend names.
///
/// A `label:` prefix on a line is dropped; names are separated by
/// whitespace or commas; duplicates keep their first position.
pub fn parse_backends(output: &str) -> Vec<SmolStr> {
    let mut backends: Vec<SmolStr> = Vec::new();

    for line in output.lines() {
        let names = line.split_once(':').map_or(line, |(_, rest)| rest);
        for name in names.split(|c: char| c.is_whitespace() || c == ',') {
            if !name.is_empty() && !backends.iter().any(|b| b == name) {
                backends.push(SmolStr::new(name));
            }
        }
    }

    backends
}

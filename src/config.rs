//! Interpreter and editing configuration

use crate::base::constants::{
    DEFAULT_BACKENDS_FLAG, DEFAULT_COMPILE_FLAG, DEFAULT_INTERPRETER, DEFAULT_REPL_FLAG,
};

/// Configuration for the REPL launcher, compile commands and indentation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Interpreter executable (looked up on `PATH` when not absolute)
    pub interpreter: String,
    /// Arguments placed before the file path when starting a REPL
    pub repl_args: Vec<String>,
    /// Arguments placed before the file path when compiling
    pub compile_args: Vec<String>,
    /// Arguments that make the interpreter print its compiler backends
    pub backend_query_args: Vec<String>,
    /// Indentation width; `None` inherits the editor's tab width
    pub indent_width: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            repl_args: vec![DEFAULT_REPL_FLAG.to_string()],
            compile_args: vec![DEFAULT_COMPILE_FLAG.to_string()],
            backend_query_args: vec![DEFAULT_BACKENDS_FLAG.to_string()],
            indent_width: None,
        }
    }
}

impl Config {
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn with_repl_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.repl_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_compile_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compile_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_backend_query_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.backend_query_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = Some(width);
        self
    }

    /// Indentation width in effect, given the editor-wide tab width
    pub fn effective_indent_width(&self, editor_tab_width: usize) -> usize {
        self.indent_width.unwrap_or(editor_tab_width)
    }

    /// Indentation string for the given nesting level
    pub fn indent(&self, level: usize, editor_tab_width: usize) -> String {
        " ".repeat(self.effective_indent_width(editor_tab_width) * level)
    }

    /// Parse a JSON settings document; missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Errors from loading a settings document
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}

//! Interpreter integration: REPL sessions, compile commands, backend listing.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use cryptol_mode::config::Config;
//! use cryptol_mode::repl::{LaunchOutcome, SessionManager};
//!
//! let mut sessions = SessionManager::new(Config::default());
//! let launch = sessions.launch(Some(Path::new("AES.cry")))?;
//! assert_eq!(launch.outcome, LaunchOutcome::Spawned);
//! # Ok::<(), cryptol_mode::repl::SessionError>(())
//! ```

mod backends;
mod command;
mod error;
mod manager;
mod process;

pub use backends::{BackendCache, BackendQuery, SystemBackendQuery, parse_backends};
pub use command::{CommandLine, backend_query_command, compile_command, repl_command};
pub use error::{Result, SessionError};
pub use manager::{Launch, LaunchOutcome, SessionHandle, SessionManager};
pub use process::{ReplProcess, Spawn, SystemSpawner};

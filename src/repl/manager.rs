//! Interactive session management — one REPL per document path.
//!
//! Sessions are registered under a display name derived from the document
//! path. Launching again for the same path reuses the registered process as
//! long as it is still running. Processes are never killed here; the host
//! closes surfaces and the interpreter exits on its own. Closed sessions
//! whose interpreter is still running are kept aside until [`SessionManager::prune`]
//! sees them exit, so no exited interpreter is left unreaped.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use smol_str::{SmolStr, format_smolstr};
use tracing::{debug, warn};

use super::backends::{BackendCache, BackendQuery};
use super::command::{self, CommandLine, require_path};
use super::error::{Result, SessionError};
use super::process::{ReplProcess, Spawn, SystemSpawner};
use crate::config::Config;

/// Identifies a live interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionHandle {
    /// Label of the host surface showing the session.
    pub display_name: SmolStr,
    /// Document the session was started for.
    pub path: PathBuf,
    /// OS process id of the interpreter.
    pub pid: u32,
}

/// Whether a launch started a new process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Spawned,
    Reused,
}

/// Result of a successful launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    pub handle: SessionHandle,
    pub outcome: LaunchOutcome,
}

struct LiveSession<P> {
    handle: SessionHandle,
    process: P,
}

/// Owns every REPL session started by the editor.
pub struct SessionManager<S: Spawn = SystemSpawner> {
    config: Config,
    spawner: S,
    sessions: FxHashMap<SmolStr, LiveSession<S::Process>>,
    /// Processes of forgotten sessions that have not been reaped yet
    detached: Vec<S::Process>,
    /// Display name of the surface that last received focus
    focused: Option<SmolStr>,
    backends: BackendCache,
}

impl SessionManager<SystemSpawner> {
    /// Manager that starts real interpreter processes.
    pub fn new(config: Config) -> Self {
        Self::with_spawner(config, SystemSpawner)
    }
}

impl<S: Spawn> SessionManager<S> {
    pub fn with_spawner(config: Config, spawner: S) -> Self {
        Self {
            config,
            spawner,
            sessions: FxHashMap::default(),
            detached: Vec::new(),
            focused: None,
            backends: BackendCache::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Surface label for the session of `path`.
    pub fn display_name(&self, path: &Path) -> SmolStr {
        format_smolstr!("*{}:{}*", self.config.interpreter, path.display())
    }

    /// Start (or refocus) the REPL for the document at `path`.
    ///
    /// A `None` or empty path fails with [`SessionError::NoFileAssociated`]
    /// before anything is spawned.
    pub fn launch(&mut self, path: Option<&Path>) -> Result<Launch> {
        let path = require_path(path)?;
        let name = self.display_name(path);

        if let Some(session) = self.sessions.get_mut(&name) {
            if poll_running(&mut session.process) {
                debug!(session = %name, pid = session.handle.pid, "reusing live session");
                let handle = session.handle.clone();
                self.focused = Some(name);
                return Ok(Launch {
                    handle,
                    outcome: LaunchOutcome::Reused,
                });
            }

            debug!(session = %name, "previous session exited, starting a new one");
            if let Some(stale) = self.sessions.remove(&name) {
                self.retire(stale.process);
            }
        }

        let command = command::repl_command(&self.config, Some(path))?;
        let process = self.spawner.spawn(&command).map_err(|e| {
            warn!(command = %command, error = %e, "failed to start interpreter");
            SessionError::spawn(&self.config.interpreter, e)
        })?;

        let handle = SessionHandle {
            display_name: name.clone(),
            path: path.to_path_buf(),
            pid: process.id(),
        };
        debug!(session = %name, pid = handle.pid, command = %command, "spawned session");

        self.sessions.insert(
            name.clone(),
            LiveSession {
                handle: handle.clone(),
                process,
            },
        );
        self.focused = Some(name);

        Ok(Launch {
            handle,
            outcome: LaunchOutcome::Spawned,
        })
    }

    /// Display name of the focused session surface.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Registered session for `path`, running or not.
    pub fn session(&self, path: &Path) -> Option<&SessionHandle> {
        self.sessions
            .get(&self.display_name(path))
            .map(|session| &session.handle)
    }

    /// The process of the session for `path`, so the host can attach its pipes.
    pub fn process_mut(&mut self, path: &Path) -> Option<&mut S::Process> {
        let name = self.display_name(path);
        self.sessions
            .get_mut(&name)
            .map(|session| &mut session.process)
    }

    /// Whether `path` has a registered, running session.
    pub fn is_live(&mut self, path: &Path) -> bool {
        self.process_mut(path).is_some_and(|process| poll_running(process))
    }

    /// Number of registered sessions whose process is still running.
    pub fn live_sessions(&mut self) -> usize {
        self.sessions
            .values_mut()
            .map(|session| poll_running(&mut session.process))
            .filter(|running| *running)
            .count()
    }

    /// Closed sessions whose interpreter has not been seen to exit yet.
    pub fn detached(&self) -> usize {
        self.detached.len()
    }

    /// The host closed the surface for `path`; forget the session.
    ///
    /// The interpreter is left running. If it has not exited yet it is
    /// reaped by a later [`prune`](Self::prune).
    pub fn close(&mut self, path: &Path) -> Option<SessionHandle> {
        let name = self.display_name(path);
        let session = self.sessions.remove(&name)?;
        if self.focused.as_ref() == Some(&name) {
            self.focused = None;
        }
        debug!(session = %name, pid = session.handle.pid, "closed session");
        self.retire(session.process);
        Some(session.handle)
    }

    /// Forget every session whose process has exited and reap exited
    /// processes of closed sessions. Returns how many sessions were dropped.
    pub fn prune(&mut self) -> usize {
        self.reap_detached();

        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| poll_running(&mut session.process));

        if self
            .focused
            .as_ref()
            .is_some_and(|name| !self.sessions.contains_key(name))
        {
            self.focused = None;
        }

        let removed = before - self.sessions.len();
        if removed > 0 {
            debug!(removed, "pruned exited sessions");
        }
        removed
    }

    /// Compile command for `path`, checking `backend` against the cached list.
    ///
    /// The check is skipped while the backend list has not been loaded.
    pub fn compile_command(&self, path: Option<&Path>, backend: Option<&str>) -> Result<CommandLine> {
        if let Some(backend) = backend {
            if self.backends.contains(backend) == Some(false) {
                return Err(SessionError::UnknownBackend(backend.to_string()));
            }
        }
        command::compile_command(&self.config, path, backend)
    }

    /// Cached backend list, loading it on first use.
    pub fn backends(&mut self, query: &impl BackendQuery) -> Result<&[SmolStr]> {
        self.backends.backends(query, &self.config)
    }

    /// Reload the backend list from the interpreter.
    pub fn refresh_backends(&mut self, query: &impl BackendQuery) -> Result<&[SmolStr]> {
        self.backends.init(query, &self.config)
    }

    pub fn invalidate_backends(&mut self) {
        self.backends.invalidate();
    }

    fn retire(&mut self, process: S::Process) {
        self.detached.push(process);
        self.reap_detached();
    }

    fn reap_detached(&mut self) {
        self.detached.retain_mut(|process| poll_running(process));
    }
}

/// Liveness of `process`. A process whose status cannot be read is treated
/// as gone: there is nothing left to wait for.
fn poll_running<P: ReplProcess>(process: &mut P) -> bool {
    match process.is_running() {
        Ok(running) => running,
        Err(e) => {
            warn!(pid = process.id(), error = %e, "cannot read interpreter status");
            false
        }
    }
}

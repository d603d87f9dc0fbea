//! Process spawning seam.
//!
//! The session manager only needs to start a process and later ask whether
//! it is still running. [`SystemSpawner`] does that with `std::process`;
//! hosts and tests can substitute their own implementation.
//!
//! Asking a process whether it is running also reaps it once it has exited,
//! so a process must not be dropped before it has answered `Ok(false)`.

use std::io;
use std::process::{Child, Stdio};

use super::command::CommandLine;

/// A running (or finished) interpreter process.
pub trait ReplProcess {
    /// OS process id.
    fn id(&self) -> u32;

    /// Whether the process has not exited yet.
    ///
    /// `Ok(false)` means the process exited and its status was collected.
    fn is_running(&mut self) -> io::Result<bool>;
}

/// Starts interpreter processes.
pub trait Spawn {
    type Process: ReplProcess;

    fn spawn(&mut self, command: &CommandLine) -> io::Result<Self::Process>;
}

impl ReplProcess for Child {
    fn id(&self) -> u32 {
        Child::id(self)
    }

    fn is_running(&mut self) -> io::Result<bool> {
        Ok(self.try_wait()?.is_none())
    }
}

/// Spawns real processes with piped standard streams.
///
/// The host owns the pipes of the returned [`Child`] and wires them to its
/// display surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl Spawn for SystemSpawner {
    type Process = Child;

    fn spawn(&mut self, command: &CommandLine) -> io::Result<Child> {
        command
            .to_command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
    }
}

//! Host capabilities for running marker commands from a terminal.
//!
//! There is no game server behind the console: delegated commands and
//! teleports are logged and recorded rather than carried out.

use std::collections::HashSet;
use std::io::{self, Stdout, Write};

use markerutils_foundation::{Error, Location, Result};
use tracing::info;

use crate::host::{CommandSender, EffectDispatcher, Permission, PermissionChecker};

/// A terminal requester with a fixed permission set.
pub struct ConsoleSender<W: Write = Stdout> {
    name: String,
    permissions: HashSet<Permission>,
    placeable: bool,
    out: W,
}

impl ConsoleSender<Stdout> {
    /// Creates a console sender printing to stdout with every permission.
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_output(io::stdout())
    }
}

impl<W: Write> ConsoleSender<W> {
    /// Creates a non-placeable console sender writing messages to `out`.
    pub fn with_output(out: W) -> Self {
        Self {
            name: "CONSOLE".to_string(),
            permissions: Permission::ALL.into_iter().collect(),
            placeable: false,
            out,
        }
    }

    /// Restricts the sender to the given permissions.
    #[must_use]
    pub fn with_permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.permissions = permissions.into_iter().collect();
        self
    }

    /// Makes the sender act as an in-world player named `name`.
    #[must_use]
    pub fn as_player(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self.placeable = true;
        self
    }

    /// Returns the message sink.
    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> PermissionChecker for ConsoleSender<W> {
    fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

impl<W: Write> CommandSender for ConsoleSender<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_placeable(&self) -> bool {
        self.placeable
    }

    fn send_message(&mut self, message: &str) {
        // A closed terminal has nobody left to read the message.
        let _ = writeln!(self.out, "{message}");
    }
}

/// Records side effects instead of performing them.
#[derive(Debug, Default)]
pub struct ConsoleEffects {
    worlds: Option<HashSet<String>>,
    dispatched: Vec<String>,
    teleports: Vec<Location>,
}

impl ConsoleEffects {
    /// Creates a dispatcher that accepts every world name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts teleports to the named worlds.
    #[must_use]
    pub fn with_worlds(mut self, worlds: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.worlds = Some(worlds.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the command lines dispatched so far.
    #[must_use]
    pub fn dispatched(&self) -> &[String] {
        &self.dispatched
    }

    /// Returns the teleport destinations requested so far.
    #[must_use]
    pub fn teleports(&self) -> &[Location] {
        &self.teleports
    }
}

impl EffectDispatcher for ConsoleEffects {
    fn dispatch_command(&mut self, sender: &dyn CommandSender, command_line: &str) -> Result<()> {
        info!(sender = sender.name(), command = command_line, "dispatching command");
        self.dispatched.push(command_line.to_string());
        Ok(())
    }

    fn teleport(&mut self, sender: &dyn CommandSender, destination: &Location) -> Result<()> {
        if let Some(worlds) = &self.worlds {
            if !worlds.contains(&destination.world) {
                return Err(Error::unknown_world(destination.world.clone()));
            }
        }
        info!(sender = sender.name(), %destination, "teleporting");
        self.teleports.push(destination.clone());
        Ok(())
    }
}

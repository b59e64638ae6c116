//! Capabilities provided by the hosting environment.
//!
//! Permission checks, messaging, and the delete/teleport side effects all
//! belong to the host. They are injected as traits so commands can run
//! against a real server, the console harness, or test doubles.

use std::fmt;
use std::str::FromStr;

use markerutils_foundation::{Location, Result};
use markerutils_query::ActionWord;
use thiserror::Error;

/// A permission gating one marker action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Permission {
    /// May delete markers.
    Delete,
    /// May teleport to markers.
    Teleport,
    /// May view marker information.
    Info,
}

/// The text did not name a permission.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown permission: {0} (expected delete, tp, or info)")]
pub struct UnknownPermission(pub String);

impl Permission {
    /// All permissions.
    pub const ALL: [Permission; 3] = [Permission::Delete, Permission::Teleport, Permission::Info];

    /// Returns the permission node checked by the host.
    #[must_use]
    pub const fn node(self) -> &'static str {
        match self {
            Self::Delete => "markerutils.delete",
            Self::Teleport => "markerutils.tp",
            Self::Info => "markerutils.info",
        }
    }

    /// Returns the permission an action requires.
    #[must_use]
    pub const fn for_action(action: ActionWord) -> Self {
        match action {
            ActionWord::Delete => Self::Delete,
            ActionWord::Tp => Self::Teleport,
            ActionWord::Info => Self::Info,
        }
    }

    /// Returns the message shown to a requester lacking this permission.
    #[must_use]
    pub const fn denial_message(self) -> &'static str {
        match self {
            Self::Delete => "You do not have permission to delete markers",
            Self::Teleport => "You do not have permission to teleport to markers",
            Self::Info => "You do not have permission to view marker information",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.node())
    }
}

impl FromStr for Permission {
    type Err = UnknownPermission;

    /// Accepts the action word (`delete`, `tp`, `info`) or the full node.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.strip_prefix("markerutils.").unwrap_or(s);
        match name {
            "delete" => Ok(Self::Delete),
            "tp" => Ok(Self::Teleport),
            "info" => Ok(Self::Info),
            _ => Err(UnknownPermission(s.to_string())),
        }
    }
}

/// Answers whether a requester holds a permission.
pub trait PermissionChecker {
    /// Returns true if the permission is granted.
    fn has_permission(&self, permission: Permission) -> bool;
}

/// Whoever invoked a command.
pub trait CommandSender: PermissionChecker {
    /// Name of the requester, for logging.
    fn name(&self) -> &str;

    /// Returns true if the requester has a body that can be moved in a world.
    ///
    /// Non-interactive requesters such as the server console are not
    /// placeable.
    fn is_placeable(&self) -> bool;

    /// Shows a message to the requester.
    fn send_message(&mut self, message: &str);
}

/// Side effects carried out by the host on behalf of a requester.
pub trait EffectDispatcher {
    /// Runs a command line through the host's own dispatcher.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses or fails to run the command.
    fn dispatch_command(&mut self, sender: &dyn CommandSender, command_line: &str) -> Result<()>;

    /// Moves the requester to `destination`.
    ///
    /// # Errors
    ///
    /// Returns an `UnknownWorld` error if the host has no world by the
    /// destination's name.
    fn teleport(&mut self, sender: &dyn CommandSender, destination: &Location) -> Result<()>;
}

//! The marker command: `<delete|info|tp> <marker id>`.
//!
//! Every request first refreshes the store if the source changed, then
//! works on one snapshot for the rest of the request.

use std::sync::Arc;

use markerutils_foundation::{Error, ErrorKind, Marker};
use markerutils_query::{ActionWord, QueryResolver, Resolution};
use markerutils_store::MarkerStore;
use tracing::{debug, info, warn};

use crate::config::CommandConfig;
use crate::host::{CommandSender, EffectDispatcher, Permission};

/// Usage line shown when a command is not handled.
pub const USAGE: &str = "Usage: <delete|info|tp> <marker id>";

/// What a command invocation did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Too few arguments or an unknown action; the host shows usage help.
    Usage,
    /// No marker has the reconstructed id.
    NotFound {
        /// The lookup key that missed.
        query: String,
    },
    /// The requester lacks the permission for the action.
    Denied(Permission),
    /// A teleport was requested by something that cannot be moved.
    NotPlaceable,
    /// The marker's world does not exist on the host.
    UnknownWorld {
        /// Name of the missing world.
        world: String,
    },
    /// Deletion was delegated to the host.
    Deleted {
        /// Id of the deleted marker.
        id: String,
    },
    /// The requester was teleported to the marker.
    Teleported {
        /// Id of the destination marker.
        id: String,
    },
    /// The marker description was sent to the requester.
    Described {
        /// Id of the described marker.
        id: String,
    },
    /// The host failed to carry out the side effect.
    EffectFailed {
        /// Id of the marker the effect targeted.
        id: String,
        /// Reason reported by the host.
        reason: String,
    },
}

impl CommandOutcome {
    /// Returns false if the invocation should fall back to usage help.
    #[must_use]
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Usage)
    }
}

/// Resolves marker commands against a shared store.
#[derive(Debug)]
pub struct MarkerCommand {
    store: Arc<MarkerStore>,
    config: CommandConfig,
}

impl MarkerCommand {
    /// Creates a command backed by `store`.
    #[must_use]
    pub fn new(store: Arc<MarkerStore>, config: CommandConfig) -> Self {
        Self { store, config }
    }

    /// Returns the backing store.
    #[must_use]
    pub fn store(&self) -> &MarkerStore {
        &self.store
    }

    /// Executes `args` (the tokens after the command name) for `sender`.
    ///
    /// The action word is matched first; the remaining tokens are
    /// reconstructed into an exact id. All refusals are reported to the
    /// sender and no side effect is performed for them.
    pub fn execute<S: AsRef<str>>(
        &self,
        sender: &mut dyn CommandSender,
        effects: &mut dyn EffectDispatcher,
        args: &[S],
    ) -> CommandOutcome {
        let [action, query @ ..] = args else {
            return CommandOutcome::Usage;
        };
        if query.is_empty() {
            return CommandOutcome::Usage;
        }
        let Ok(action) = action.as_ref().parse::<ActionWord>() else {
            return CommandOutcome::Usage;
        };

        self.refresh();
        let snapshot = self.store.current();

        let marker = match QueryResolver::resolve_tokens(query, snapshot.markers()) {
            Some(Resolution::Unique(marker)) => marker,
            Some(Resolution::NotFound { query }) => {
                sender.send_message(&format!("No marker found by ID '{query}'"));
                return CommandOutcome::NotFound {
                    query: query.to_string(),
                };
            }
            None => return CommandOutcome::Usage,
        };

        let permission = Permission::for_action(action);
        if !sender.has_permission(permission) {
            debug!(sender = sender.name(), %permission, "permission denied");
            sender.send_message(permission.denial_message());
            return CommandOutcome::Denied(permission);
        }

        match action {
            ActionWord::Delete => self.delete(sender, effects, marker),
            ActionWord::Tp => Self::teleport(sender, effects, marker),
            ActionWord::Info => {
                sender.send_message(&marker.describe());
                CommandOutcome::Described {
                    id: marker.id.clone(),
                }
            }
        }
    }

    /// Returns completions for partially typed `args`.
    ///
    /// With at most one token, completes the action word. Otherwise the
    /// tokens after the action word are joined and matched against labels.
    #[must_use]
    pub fn complete<S: AsRef<str>>(&self, args: &[S]) -> Vec<String> {
        let words = |prefix: &str| -> Vec<String> {
            ActionWord::complete(prefix)
                .into_iter()
                .map(String::from)
                .collect()
        };

        match args {
            [] => words(""),
            [action] => words(action.as_ref()),
            [_, fragment @ ..] => {
                self.refresh();
                QueryResolver::complete_tokens(fragment, self.store.current().markers())
            }
        }
    }

    fn delete(
        &self,
        sender: &mut dyn CommandSender,
        effects: &mut dyn EffectDispatcher,
        marker: &Marker,
    ) -> CommandOutcome {
        let command_line = self.config.delete_command_for(&marker.id);
        match effects.dispatch_command(&*sender, &command_line) {
            Ok(()) => {
                info!(sender = sender.name(), id = %marker.id, "delegated marker deletion");
                CommandOutcome::Deleted {
                    id: marker.id.clone(),
                }
            }
            Err(err) => {
                warn!(
                    sender = sender.name(),
                    id = %marker.id,
                    error = %err,
                    "marker deletion failed"
                );
                sender.send_message(&format!("Could not delete marker '{}': {err}", marker.id));
                CommandOutcome::EffectFailed {
                    id: marker.id.clone(),
                    reason: err.to_string(),
                }
            }
        }
    }

    fn teleport(
        sender: &mut dyn CommandSender,
        effects: &mut dyn EffectDispatcher,
        marker: &Marker,
    ) -> CommandOutcome {
        if !sender.is_placeable() {
            sender.send_message("Only players can be teleported");
            return CommandOutcome::NotPlaceable;
        }

        match effects.teleport(&*sender, &marker.location()) {
            Ok(()) => {
                info!(sender = sender.name(), id = %marker.id, "teleported to marker");
                CommandOutcome::Teleported {
                    id: marker.id.clone(),
                }
            }
            Err(Error {
                kind: ErrorKind::UnknownWorld(world),
                ..
            }) => {
                sender.send_message(&format!("Could not find world '{world}'"));
                CommandOutcome::UnknownWorld { world }
            }
            Err(err) => {
                warn!(sender = sender.name(), id = %marker.id, error = %err, "teleport failed");
                sender.send_message(&format!(
                    "Could not teleport to marker '{}': {err}",
                    marker.id
                ));
                CommandOutcome::EffectFailed {
                    id: marker.id.clone(),
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Refreshes the store, falling back to the published snapshot on failure.
    fn refresh(&self) {
        if let Err(err) = self.store.refresh_if_stale() {
            debug!(error = %err, "serving previous marker snapshot");
        }
    }
}

//! Command surface, completion, host capabilities, and console for markerutils.
//!
//! This crate provides:
//! - [`MarkerCommand`] - The `delete`/`info`/`tp` command and its completion
//! - Host capability traits ([`PermissionChecker`], [`CommandSender`], [`EffectDispatcher`])
//! - [`Console`] - An interactive console for running commands outside a host

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod console;
pub mod editor;
pub mod host;
pub mod repl;

pub use command::{CommandOutcome, MarkerCommand};
pub use config::CommandConfig;
pub use console::{ConsoleEffects, ConsoleSender};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use host::{CommandSender, EffectDispatcher, Permission, PermissionChecker, UnknownPermission};
pub use repl::Console;

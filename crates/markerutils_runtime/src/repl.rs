//! The interactive marker console.

use std::sync::Arc;

use markerutils_foundation::{Error, Result};
use tracing::debug;

use crate::command::{CommandOutcome, MarkerCommand, USAGE};
use crate::console::{ConsoleEffects, ConsoleSender};
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::host::{CommandSender, EffectDispatcher};

const HELP: &str = "\
Commands:
  delete <marker id>   Delete a marker
  info <marker id>     Show a marker's id, label, world, and coordinates
  tp <marker id>       Teleport to a marker
  :complete <args>     List completions for partially typed arguments
  :reload              Reload the marker file now
  :help                Show this help
  :quit                Exit";

/// Runs marker commands read from a line editor.
pub struct Console<
    E: LineEditor = RustylineEditor,
    S: CommandSender = ConsoleSender,
    D: EffectDispatcher = ConsoleEffects,
> {
    editor: E,
    command: Arc<MarkerCommand>,
    sender: S,
    effects: D,
    show_banner: bool,
    prompt: String,
}

impl<E: LineEditor, S: CommandSender, D: EffectDispatcher> Console<E, S, D> {
    /// Creates a console running `command` as `sender`.
    pub fn new(editor: E, command: Arc<MarkerCommand>, sender: S, effects: D) -> Self {
        Self {
            editor,
            command,
            sender,
            effects,
            show_banner: true,
            prompt: "markers> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the requester commands run as.
    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Returns the effect dispatcher.
    pub fn effects(&self) -> &D {
        &self.effects
    }

    /// Runs the console until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.sender.send_message(&format!(
                "markerutils {} (source: {})",
                env!("CARGO_PKG_VERSION"),
                self.command.store().config().source_path.display()
            ));
            self.sender.send_message("Type :help for commands. Use Ctrl+D to exit.");
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);
            if !self.eval(&line) {
                break;
            }
        }

        Ok(())
    }

    /// Evaluates one input line.
    ///
    /// Returns false when the console should exit.
    pub fn eval(&mut self, line: &str) -> bool {
        let words: Vec<&str> = line.split(' ').filter(|word| !word.is_empty()).collect();

        match words.as_slice() {
            [":quit" | ":q"] => return false,
            [":help"] => self.sender.send_message(HELP),
            [":reload"] => self.reload(),
            [":complete", args @ ..] => {
                // A trailing space starts a new, empty token.
                let mut args = args.to_vec();
                if line.ends_with(' ') {
                    args.push("");
                }
                for candidate in self.command.complete(&args) {
                    self.sender.send_message(&candidate);
                }
            }
            [directive, ..] if directive.starts_with(':') => {
                self.sender.send_message(&format!("Unknown directive {directive}"));
            }
            args => {
                let outcome = self.command.execute(&mut self.sender, &mut self.effects, args);
                debug!(?outcome, "command finished");
                if outcome == CommandOutcome::Usage {
                    self.sender.send_message(USAGE);
                }
            }
        }

        true
    }

    fn reload(&mut self) {
        match self.command.store().load() {
            Ok(snapshot) => self
                .sender
                .send_message(&format!("Loaded {} markers", snapshot.markers().len())),
            Err(err) => self.report(&err),
        }
    }

    fn report(&mut self, error: &Error) {
        self.sender.send_message(&format!("Error: {error}"));
    }
}

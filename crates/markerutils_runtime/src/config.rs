//! Configuration for the marker command.

/// Default command line used to delegate marker deletion to the mapping tool.
pub const DEFAULT_DELETE_COMMAND: &str = "dmarker delete id:{id}";

/// Configuration for the marker command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandConfig {
    /// Command line run through the host to delete a marker.
    ///
    /// `{id}` is replaced by the resolved marker id.
    pub delete_command: String,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            delete_command: DEFAULT_DELETE_COMMAND.to_string(),
        }
    }
}

impl CommandConfig {
    /// Builder method to set the delete command template.
    #[must_use]
    pub fn with_delete_command(mut self, template: impl Into<String>) -> Self {
        self.delete_command = template.into();
        self
    }

    /// Renders the delete command for a marker id.
    #[must_use]
    pub fn delete_command_for(&self, id: &str) -> String {
        self.delete_command.replace("{id}", id)
    }
}

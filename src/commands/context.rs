//! Command execution context

use crate::store::Engine;

/// Context provided to commands during execution
///
/// This context gives commands access to the engine. Keeps coupling
/// loose by providing a clean interface.
pub struct CommandContext {
    /// The storage engine
    pub engine: Engine,
}

impl CommandContext {
    /// Create a new command context
    pub fn new() -> Self {
        CommandContext {
            engine: Engine::new(),
        }
    }

    /// Create a context with a specific engine capacity
    pub fn with_capacity(capacity: usize) -> Self {
        CommandContext {
            engine: Engine::with_capacity(capacity),
        }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

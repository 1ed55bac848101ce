//! Command registry
//!
//! Centralized registry for all available commands.
//! This allows loose coupling between command implementations and the dispatcher.

use super::{count, data, txn, Command};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of all available commands
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new command registry and register all commands
    pub fn new() -> Self {
        let mut registry = CommandRegistry {
            commands: HashMap::new(),
        };

        // Register data commands
        registry.register(Arc::new(data::SetCommand));
        registry.register(Arc::new(data::GetCommand));
        registry.register(Arc::new(data::UnsetCommand));

        // Register count commands
        registry.register(Arc::new(count::NumEqualToCommand));

        // Register transaction commands
        registry.register(Arc::new(txn::BeginCommand));
        registry.register(Arc::new(txn::RollbackCommand));
        registry.register(Arc::new(txn::CommitCommand));

        registry
    }

    /// Register a command
    fn register(&mut self, command: Arc<dyn Command>) {
        let name = command.name().to_uppercase();
        self.commands.insert(name, command);
    }

    /// Get a command by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(&name.to_uppercase()).cloned()
    }

    /// Check if a command exists
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_uppercase())
    }

    /// Get all command names
    pub fn command_names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = CommandRegistry::new();

        assert!(registry.get("SET").is_some());
        assert!(registry.get("set").is_some());
        assert!(registry.get("NumEqualTo").is_some());
        assert!(registry.get("FLUSH").is_none());
    }

    #[test]
    fn test_fixed_command_set() {
        let registry = CommandRegistry::new();

        for name in ["SET", "GET", "UNSET", "NUMEQUALTO", "BEGIN", "ROLLBACK", "COMMIT"] {
            assert!(registry.has_command(name), "missing command {}", name);
        }
        assert_eq!(registry.command_names().len(), 7);
    }
}

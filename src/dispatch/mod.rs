//! Command dispatcher
//!
//! Routes one input line to the appropriate handler.
//! This module provides loose coupling between the shell and command
//! implementations.

use crate::commands::{CommandContext, CommandRegistry};
use crate::protocol::Reply;
use bytes::Bytes;
use tracing::{debug, warn};

/// Command dispatcher
///
/// Receives raw input lines, tokenizes and validates them, and routes
/// to the appropriate handlers.
pub struct Dispatcher {
    /// Command registry
    registry: CommandRegistry,

    /// Command execution context
    context: CommandContext,
}

impl Dispatcher {
    /// Create a new dispatcher
    pub fn new() -> Self {
        Dispatcher {
            registry: CommandRegistry::new(),
            context: CommandContext::new(),
        }
    }

    /// Create a dispatcher with specified engine capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Dispatcher {
            registry: CommandRegistry::new(),
            context: CommandContext::with_capacity(capacity),
        }
    }

    /// Dispatch one input line
    ///
    /// Splits the line on whitespace into a command name and arguments,
    /// then routes to the appropriate handler.
    pub fn dispatch_line(&mut self, line: &str) -> Reply {
        let mut tokens = line.split_whitespace();

        // First token is the command name
        let cmd_name = match tokens.next() {
            Some(name) => name,
            None => {
                return Reply::error("empty command");
            }
        };

        debug!("Dispatching command: {}", cmd_name);

        // Look up the command (case-insensitive)
        let command = match self.registry.get(cmd_name) {
            Some(cmd) => cmd,
            None => {
                warn!("Unknown command: {}", cmd_name);
                return Reply::error(format!("unknown command '{}'", cmd_name));
            }
        };

        // Remaining tokens are the arguments
        let cmd_args: Vec<Bytes> = tokens
            .map(|tok| Bytes::copy_from_slice(tok.as_bytes()))
            .collect();

        // Validate argument count
        if cmd_args.len() < command.min_args() {
            return Reply::error(format!(
                "wrong number of arguments for '{}' command",
                cmd_name
            ));
        }

        if let Some(max) = command.max_args() {
            if cmd_args.len() > max {
                return Reply::error(format!(
                    "wrong number of arguments for '{}' command",
                    cmd_name
                ));
            }
        }

        // Execute the command
        let reply = command.execute(&mut self.context, &cmd_args);
        debug!("Reply: {}", reply);
        reply
    }

    /// Get reference to the context (for testing/inspection)
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Get mutable reference to the context (for testing/inspection)
    pub fn context_mut(&mut self) -> &mut CommandContext {
        &mut self.context
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

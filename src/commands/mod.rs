//! Command execution module
//!
//! Provides a unified interface for all commands through the Command trait.
//! Each command family is implemented in a separate file for high cohesion.

mod context;
mod registry;

// Command implementations
mod count;
mod data;
mod txn;

pub use context::CommandContext;
pub use registry::CommandRegistry;

use crate::protocol::Reply;
use bytes::Bytes;

/// Command execution trait
///
/// All commands implement this trait with a single execute method.
/// This provides loose coupling between command implementations and the
/// dispatcher.
pub trait Command: Send + Sync {
    /// Execute the command with the given context and arguments
    ///
    /// Arguments:
    /// - ctx: mutable reference to the command context (contains the engine)
    /// - args: command arguments (excluding the command name itself)
    ///
    /// Returns:
    /// - Reply representing the line to print for the client, if any
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> Reply;

    /// Get the command name (for registration/logging)
    fn name(&self) -> &'static str;

    /// Get the minimum number of arguments required
    fn min_args(&self) -> usize {
        0
    }

    /// Get the maximum number of arguments (None = unlimited)
    fn max_args(&self) -> Option<usize> {
        None
    }
}

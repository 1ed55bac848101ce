//! Transaction commands (BEGIN, ROLLBACK, COMMIT)

use super::{Command, CommandContext};
use crate::protocol::Reply;
use crate::store::EngineError;
use bytes::Bytes;

/// BEGIN command - Open a new transaction level
///
/// Syntax: BEGIN
pub struct BeginCommand;

impl Command for BeginCommand {
    fn execute(&self, ctx: &mut CommandContext, _args: &[Bytes]) -> Reply {
        ctx.engine.begin();
        Reply::None
    }

    fn name(&self) -> &'static str {
        "BEGIN"
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

/// ROLLBACK command - Undo the innermost transaction
///
/// Syntax: ROLLBACK
pub struct RollbackCommand;

impl Command for RollbackCommand {
    fn execute(&self, ctx: &mut CommandContext, _args: &[Bytes]) -> Reply {
        match ctx.engine.rollback() {
            Ok(()) => Reply::None,
            Err(EngineError::NoTransaction) => Reply::NoTransaction,
            Err(e) => Reply::error(e.to_string()),
        }
    }

    fn name(&self) -> &'static str {
        "ROLLBACK"
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

/// COMMIT command - Finalize the data state, collapsing all pending
/// transaction levels
///
/// Syntax: COMMIT
pub struct CommitCommand;

impl Command for CommitCommand {
    fn execute(&self, ctx: &mut CommandContext, _args: &[Bytes]) -> Reply {
        match ctx.engine.commit() {
            Ok(()) => Reply::None,
            Err(EngineError::NoTransaction) => Reply::NoTransaction,
            Err(e) => Reply::error(e.to_string()),
        }
    }

    fn name(&self) -> &'static str {
        "COMMIT"
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_rollback() {
        let mut ctx = CommandContext::new();
        ctx.engine.set("a", "10").unwrap();

        assert_eq!(BeginCommand.execute(&mut ctx, &[]), Reply::None);
        ctx.engine.set("a", "20").unwrap();

        assert_eq!(RollbackCommand.execute(&mut ctx, &[]), Reply::None);
        assert_eq!(ctx.engine.get(b"a").unwrap(), Bytes::from("10"));
    }

    #[test]
    fn test_commit_collapses_all_levels() {
        let mut ctx = CommandContext::new();

        BeginCommand.execute(&mut ctx, &[]);
        ctx.engine.set("a", "10").unwrap();
        BeginCommand.execute(&mut ctx, &[]);
        ctx.engine.set("a", "20").unwrap();

        assert_eq!(CommitCommand.execute(&mut ctx, &[]), Reply::None);
        assert_eq!(ctx.engine.get(b"a").unwrap(), Bytes::from("20"));

        // no level left to roll back
        assert_eq!(RollbackCommand.execute(&mut ctx, &[]), Reply::NoTransaction);
    }

    #[test]
    fn test_no_transaction_replies() {
        let mut ctx = CommandContext::new();

        assert_eq!(RollbackCommand.execute(&mut ctx, &[]), Reply::NoTransaction);
        assert_eq!(CommitCommand.execute(&mut ctx, &[]), Reply::NoTransaction);
    }
}

//! Data commands (SET, GET, UNSET)

use super::{Command, CommandContext};
use crate::protocol::Reply;
use crate::store::EngineError;
use bytes::Bytes;

/// SET command - Set a key to a value
///
/// Syntax: SET key value
pub struct SetCommand;

impl Command for SetCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> Reply {
        // Validate argument count
        if args.len() < 2 {
            return Reply::error("wrong number of arguments for 'SET' command");
        }

        match ctx.engine.set(args[0].clone(), args[1].clone()) {
            Ok(()) => Reply::None,
            Err(e) => Reply::error(e.to_string()),
        }
    }

    fn name(&self) -> &'static str {
        "SET"
    }

    fn min_args(&self) -> usize {
        2
    }

    fn max_args(&self) -> Option<usize> {
        Some(2)
    }
}

/// GET command - Get the value of a key
///
/// Syntax: GET key
pub struct GetCommand;

impl Command for GetCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> Reply {
        // Validate argument count
        if args.is_empty() {
            return Reply::error("wrong number of arguments for 'GET' command");
        }

        match ctx.engine.get(&args[0]) {
            Ok(value) => Reply::Value(value),
            Err(EngineError::InvalidName) => Reply::Null,
            Err(e) => Reply::error(e.to_string()),
        }
    }

    fn name(&self) -> &'static str {
        "GET"
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}

/// UNSET command - Remove a key
///
/// Syntax: UNSET key
pub struct UnsetCommand;

impl Command for UnsetCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> Reply {
        // Validate argument count
        if args.is_empty() {
            return Reply::error("wrong number of arguments for 'UNSET' command");
        }

        ctx.engine.unset(&args[0]);
        Reply::None
    }

    fn name(&self) -> &'static str {
        "UNSET"
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}
